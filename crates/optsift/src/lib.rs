//! Schema-less command-line tokenizer with typed, consume-once lookups.
//!
//! `optsift` walks an argument vector once and sorts every token into one of
//! four stores:
//! - long options (`--name`, `--name value`, `--name=value`)
//! - short options with an explicit value (`-c 155`, `-c=155`)
//! - short clusters that were not split (`-Syu`, `-c155`)
//! - positional arguments (everything else)
//!
//! Options are then pulled out by an [`OptionKey`], a `(long, short)` alias
//! pair naming one logical option. Every successful lookup removes what it
//! matched, so each option can be read at most once.
//!
//! # Example
//!
//! ```
//! use optsift::Args;
//!
//! # fn main() -> optsift::Result<()> {
//! let mut args = Args::parse(["prog", "--port", "8080", "notes.txt", "-Syu"])?;
//!
//! assert_eq!(args.get::<u16>(("port", 'p'))?, Some(8080));
//! assert!(args.get::<bool>(("sync", 'S'))?);
//! assert!(args.get::<bool>(("refresh", 'y'))?);
//! assert!(!args.get::<bool>(("install", 'i'))?);
//! assert_eq!(args.get_or(("mode", 'm'), "fast".to_string())?, "fast");
//!
//! // Consumed options read as absent afterwards.
//! assert_eq!(args.get::<u16>(("port", 'p'))?, None);
//! assert_eq!(args.positionals(), ["notes.txt"]);
//! # Ok(())
//! # }
//! ```
//!
//! Values are converted through [`FromArg`], which embedding code can
//! implement for its own types.

mod args;
mod convert;
mod error;
mod key;
mod snapshot;
mod token;

pub use args::{Args, Lookup};
pub use convert::{ConversionError, FromArg};
pub use error::{ArgsError, Result};
pub use key::OptionKey;
pub use snapshot::Snapshot;
