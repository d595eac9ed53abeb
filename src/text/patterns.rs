//! Character-class pattern table
//!
//! The four regexes behind the filter family, compiled once on first use.
//! The classes are ASCII-ranged on purpose; "alphanumeric" additionally
//! admits spaces and hyphens.

use std::sync::LazyLock;

use regex::Regex;

/// One or more whitespace characters
pub const WHITE_SPACE: &str = r"\s+";

/// Any character that is not a decimal digit
pub const NON_NUMERICS: &str = "[^0-9]";

/// Any decimal digit
pub const NUMERICS: &str = "[0-9]";

/// Any character outside letters, digits, space, and hyphen
pub const NON_ALPHA_NUMERICS: &str = "[^a-zA-Z0-9 -]";

// The patterns above are fixed literals.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid character-class pattern")
}

pub static WHITE_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| compile(WHITE_SPACE));
pub static NON_NUMERICS_RE: LazyLock<Regex> = LazyLock::new(|| compile(NON_NUMERICS));
pub static NUMERICS_RE: LazyLock<Regex> = LazyLock::new(|| compile(NUMERICS));
pub static NON_ALPHA_NUMERICS_RE: LazyLock<Regex> = LazyLock::new(|| compile(NON_ALPHA_NUMERICS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        // Force every lazy static; a bad pattern would panic here instead
        // of at first production use.
        assert!(WHITE_SPACE_RE.is_match(" "));
        assert!(NON_NUMERICS_RE.is_match("a"));
        assert!(NUMERICS_RE.is_match("7"));
        assert!(NON_ALPHA_NUMERICS_RE.is_match("!"));
    }
}
