use std::fmt;

/// The identity of one logical option: its long name and its short alias.
///
/// Both names refer to the same option. A lookup matches `--long`,
/// `--long=value`, `-s value`, `-s=value` and any occurrence of `s` inside a
/// short cluster such as `-xsy`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionKey {
    long: String,
    short: char,
}

impl OptionKey {
    /// Create a key. Leading dashes on `long` are ignored.
    pub fn new(long: impl Into<String>, short: char) -> Self {
        let long: String = long.into();
        Self {
            long: long.trim_start_matches('-').to_string(),
            short,
        }
    }

    /// Long name without dashes.
    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn short(&self) -> char {
        self.short
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}/-{}", self.long, self.short)
    }
}

impl From<(&str, char)> for OptionKey {
    fn from((long, short): (&str, char)) -> Self {
        Self::new(long, short)
    }
}

impl From<(String, char)> for OptionKey {
    fn from((long, short): (String, char)) -> Self {
        Self::new(long, short)
    }
}

impl From<&OptionKey> for OptionKey {
    fn from(key: &OptionKey) -> Self {
        key.clone()
    }
}
