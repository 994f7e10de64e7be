use crate::convert::ConversionError;
use crate::key::OptionKey;

/// Failures surfaced by tokenization or by a single lookup.
///
/// An option that is simply missing is not an error: lookups return
/// `Ok(None)` (or `Ok(false)` for booleans) instead.
#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("option {key} is given in both long and short form")]
    ConflictingRepresentation { key: OptionKey },

    #[error("boolean flag -{flag} is given {count} times")]
    DuplicateBooleanFlag { flag: char, count: usize },

    #[error("invalid short option '{token}': {reason}")]
    InvalidShortOptionShape { token: String, reason: &'static str },

    #[error("cannot convert '{value}' given for {key} to {target}: {source}")]
    Conversion {
        key: OptionKey,
        value: String,
        target: &'static str,
        #[source]
        source: ConversionError,
    },
}

pub type Result<T> = std::result::Result<T, ArgsError>;
