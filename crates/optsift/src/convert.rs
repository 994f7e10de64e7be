use std::ffi::OsString;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

/// Why a textual option value could not be turned into the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ConversionError(String);

impl ConversionError {
    pub fn new(reason: impl fmt::Display) -> Self {
        Self(reason.to_string())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl From<ParseIntError> for ConversionError {
    fn from(err: ParseIntError) -> Self {
        Self::new(err)
    }
}

impl From<ParseFloatError> for ConversionError {
    fn from(err: ParseFloatError) -> Self {
        Self::new(err)
    }
}

/// Conversion from an option's text into a typed value.
///
/// Implement this for your own types to read them with
/// [`Args::get`](crate::Args::get) and [`Args::get_or`](crate::Args::get_or):
///
/// ```
/// use optsift::{Args, ConversionError, FromArg};
///
/// struct Person {
///     name: String,
///     age: u8,
/// }
///
/// impl FromArg for Person {
///     fn from_arg(value: &str) -> Result<Self, ConversionError> {
///         let (name, age) = value
///             .split_once('.')
///             .ok_or_else(|| ConversionError::new("expected NAME.AGE"))?;
///         Ok(Person {
///             name: name.to_string(),
///             age: age.parse()?,
///         })
///     }
/// }
///
/// # fn main() -> optsift::Result<()> {
/// let mut args = Args::parse(["prog", "-p", "Rel.19"])?;
/// let person = args.get::<Person>(("person", 'p'))?.unwrap();
/// assert_eq!(person.name, "Rel");
/// assert_eq!(person.age, 19);
/// # Ok(())
/// # }
/// ```
///
/// `bool` has no implementation: flags are read through the presence-only
/// protocol of `get::<bool>`, which has no payload to convert.
pub trait FromArg: Sized {
    fn from_arg(value: &str) -> Result<Self, ConversionError>;
}

macro_rules! from_arg_via_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn from_arg(value: &str) -> Result<Self, ConversionError> {
                    Ok(value.parse::<$ty>()?)
                }
            }
        )*
    };
}

from_arg_via_parse!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl FromArg for String {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        Ok(value.to_string())
    }
}

impl FromArg for char {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            (None, _) => Err(ConversionError::new("expected one character, got none")),
            (Some(_), Some(_)) => Err(ConversionError::new(format!(
                "expected one character, got {}",
                value.chars().count()
            ))),
        }
    }
}

impl FromArg for PathBuf {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        Ok(PathBuf::from(value))
    }
}

impl FromArg for OsString {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        Ok(OsString::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(u32::from_arg("4294967295"), Ok(u32::MAX));
        assert!(u32::from_arg("4294967296").is_err());
        assert!(i8::from_arg("-129").is_err());
        assert_eq!(i64::from_arg("-402"), Ok(-402));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(i32::from_arg("").is_err());
        assert!(i32::from_arg("12abc").is_err());
        assert!(u8::from_arg("-1").is_err());
        assert!(f64::from_arg("one").is_err());
    }

    #[test]
    fn floats_accept_signs_and_fractions() {
        assert_eq!(f64::from_arg("-20.24"), Ok(-20.24));
        assert_eq!(f32::from_arg("12.25"), Ok(12.25));
    }

    #[test]
    fn char_needs_exactly_one_character() {
        assert_eq!(char::from_arg("x"), Ok('x'));
        assert_eq!(char::from_arg("é"), Ok('é'));
        let err = char::from_arg("xy").unwrap_err();
        assert_eq!(err.reason(), "expected one character, got 2");
        assert!(char::from_arg("").is_err());
    }

    #[test]
    fn text_types_pass_through() {
        assert_eq!(String::from_arg("blank"), Ok("blank".to_string()));
        assert_eq!(PathBuf::from_arg("a/b.txt"), Ok(PathBuf::from("a/b.txt")));
        assert_eq!(OsString::from_arg(""), Ok(OsString::new()));
    }
}
