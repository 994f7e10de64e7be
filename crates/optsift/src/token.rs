//! Token classification for the single tokenizing pass.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind<'a> {
    /// `--name` or `--name=value`, dashes stripped.
    Long(&'a str),
    /// `-x`, `-xyz`, `-x=value`, leading dash stripped.
    Short(&'a str),
    Positional,
}

pub(crate) fn classify(token: &str) -> TokenKind<'_> {
    if token.starts_with("--") {
        let name = token.trim_start_matches('-');
        if name.is_empty() {
            return TokenKind::Positional;
        }
        return TokenKind::Long(name);
    }
    match token.strip_prefix('-') {
        Some(body) if !body.is_empty() => TokenKind::Short(body),
        _ => TokenKind::Positional,
    }
}

/// Whether `next` should be consumed as the value of the option before it.
///
/// Anything not starting with a dash qualifies, and so does a dash followed by
/// a digit, so that `--offset -402` reads `-402` as a value.
pub(crate) fn takes_next(next: &str) -> bool {
    match next.strip_prefix('-') {
        None => true,
        Some(rest) => rest.starts_with(|c: char| c.is_ascii_digit()),
    }
}

/// Split on the first `=`.
pub(crate) fn split_inline(body: &str) -> Option<(&str, &str)> {
    body.split_once('=')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_long_short_and_positional() {
        assert_eq!(classify("--port"), TokenKind::Long("port"));
        assert_eq!(classify("--port=80"), TokenKind::Long("port=80"));
        assert_eq!(classify("---port"), TokenKind::Long("port"));
        assert_eq!(classify("-Syu"), TokenKind::Short("Syu"));
        assert_eq!(classify("-c=55"), TokenKind::Short("c=55"));
        assert_eq!(classify("file.txt"), TokenKind::Positional);
    }

    #[test]
    fn bare_dashes_are_positional() {
        assert_eq!(classify("-"), TokenKind::Positional);
        assert_eq!(classify("--"), TokenKind::Positional);
        assert_eq!(classify("----"), TokenKind::Positional);
        assert_eq!(classify(""), TokenKind::Positional);
    }

    #[test]
    fn negative_numbers_are_values() {
        assert!(takes_next("8080"));
        assert!(takes_next("blank"));
        assert!(takes_next(""));
        assert!(takes_next("-402"));
        assert!(takes_next("-20.24"));
        assert!(!takes_next("-v"));
        assert!(!takes_next("--port"));
        assert!(!takes_next("-"));
        assert!(!takes_next("-.5"));
    }

    #[test]
    fn splits_on_first_equals_only() {
        assert_eq!(split_inline("a=b=c"), Some(("a", "b=c")));
        assert_eq!(split_inline("abc"), None);
    }
}
