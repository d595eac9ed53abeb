//! Character-class text filters
//!
//! Paired operations over four fixed character classes: each `remove_*`
//! deletes every matching character, each `has_*` reports whether at least
//! one exists. All are pure, total functions; the classes themselves live
//! in [`patterns`].

pub mod patterns;

/// Delete every whitespace character
///
/// # Example
///
/// ```rust
/// use extenders::remove_white_space;
///
/// assert_eq!(remove_white_space("a b\tc"), "abc");
/// ```
pub fn remove_white_space(input: &str) -> String {
    patterns::WHITE_SPACE_RE.replace_all(input, "").into_owned()
}

/// Whether the input contains any whitespace
pub fn has_white_space(input: &str) -> bool {
    patterns::WHITE_SPACE_RE.is_match(input)
}

/// Delete every decimal digit
pub fn remove_numerics(input: &str) -> String {
    patterns::NUMERICS_RE.replace_all(input, "").into_owned()
}

/// Whether the input contains any decimal digit
///
/// # Example
///
/// ```rust
/// use extenders::has_numerics;
///
/// assert!(has_numerics("a1b"));
/// assert!(!has_numerics("abc"));
/// ```
pub fn has_numerics(input: &str) -> bool {
    patterns::NUMERICS_RE.is_match(input)
}

/// Delete everything except decimal digits
///
/// # Example
///
/// ```rust
/// use extenders::remove_non_numerics;
///
/// assert_eq!(remove_non_numerics("a1b2c3"), "123");
/// ```
pub fn remove_non_numerics(input: &str) -> String {
    patterns::NON_NUMERICS_RE.replace_all(input, "").into_owned()
}

/// Whether the input contains any non-digit character
pub fn has_non_numerics(input: &str) -> bool {
    patterns::NON_NUMERICS_RE.is_match(input)
}

/// Delete everything except letters, digits, spaces, and hyphens
pub fn remove_non_alpha_numerics(input: &str) -> String {
    patterns::NON_ALPHA_NUMERICS_RE
        .replace_all(input, "")
        .into_owned()
}

/// Whether the input contains anything outside letters, digits, spaces,
/// and hyphens
pub fn has_non_alpha_numerics(input: &str) -> bool {
    patterns::NON_ALPHA_NUMERICS_RE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_white_space() {
        assert_eq!(remove_white_space("a b\tc"), "abc");
        assert_eq!(remove_white_space("  leading and trailing  "), "leadingandtrailing");
        assert_eq!(remove_white_space("line\nbreaks\r\ntoo"), "linebreakstoo");
        assert_eq!(remove_white_space("untouched"), "untouched");
        assert_eq!(remove_white_space(""), "");
    }

    #[test]
    fn test_has_white_space() {
        assert!(has_white_space("a b"));
        assert!(has_white_space("\t"));
        assert!(!has_white_space("abc"));
        assert!(!has_white_space(""));
    }

    #[test]
    fn test_remove_numerics() {
        assert_eq!(remove_numerics("a1b2c3"), "abc");
        assert_eq!(remove_numerics("12345"), "");
        assert_eq!(remove_numerics("none"), "none");
    }

    #[test]
    fn test_has_numerics() {
        assert!(has_numerics("a1b"));
        assert!(has_numerics("42"));
        assert!(!has_numerics("abc"));
        assert!(!has_numerics(""));
    }

    #[test]
    fn test_remove_non_numerics() {
        assert_eq!(remove_non_numerics("a1b2c3"), "123");
        assert_eq!(remove_non_numerics("(555) 867-5309"), "5558675309");
        assert_eq!(remove_non_numerics("no digits"), "");
    }

    #[test]
    fn test_has_non_numerics() {
        assert!(has_non_numerics("a1"));
        assert!(has_non_numerics(" 1"));
        assert!(!has_non_numerics("123"));
        assert!(!has_non_numerics(""));
    }

    #[test]
    fn test_remove_non_alpha_numerics() {
        assert_eq!(remove_non_alpha_numerics("semi-colon; full stop."), "semi-colon full stop");
        assert_eq!(remove_non_alpha_numerics("keep 123 - this"), "keep 123 - this");
        assert_eq!(remove_non_alpha_numerics("päss"), "pss"); // ASCII classes only
    }

    #[test]
    fn test_has_non_alpha_numerics() {
        assert!(has_non_alpha_numerics("hello!"));
        assert!(has_non_alpha_numerics("tab\there"));
        assert!(!has_non_alpha_numerics("spaces and - hyphens ok"));
        assert!(!has_non_alpha_numerics(""));
    }
}
