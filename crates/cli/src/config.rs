use anyhow::{Result, bail};
use std::str::FromStr;

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "OPTSIFT_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Read the format from `OPTSIFT_FORMAT`, defaulting to text when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(FORMAT_ENV) {
            Ok(v) if !v.trim().is_empty() => v.parse(),
            _ => Ok(Self::default()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown {FORMAT_ENV} value '{other}' (expected 'text' or 'json')"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("yaml"), "{err}");
    }
}
