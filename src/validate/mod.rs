//! Email and URL validation
//!
//! Email validation is canonical-round-trip based: the input is run through
//! a lenient mailbox parser and accepted only if the parsed address prints
//! back as exactly the original input. The leniency is the point: inputs
//! like `"user@example.com "` or `Jane <jane@example.com>` parse fine but
//! are not canonical, so they are rejected.

use std::fmt;

use url::Url;

use crate::error::{ExtenderError, Result};

/// A parsed mailbox: optional display name plus `local@domain`
///
/// The parser is deliberately lenient. It trims surrounding whitespace and
/// accepts an optional display name in front of an angle-bracketed address
/// (`Jane Doe <jane@example.com>`, `"Jane Doe" <jane@example.com>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAddress {
    display_name: Option<String>,
    local: String,
    domain: String,
}

impl MailAddress {
    /// Parse a mailbox from text
    ///
    /// # Arguments
    ///
    /// * `input` - The text to parse; surrounding whitespace is ignored
    ///
    /// # Errors
    ///
    /// Returns [`ExtenderError::MailAddress`] when the input has no
    /// `local@domain` shape after the lenient rewrites.
    ///
    /// # Example
    ///
    /// ```rust
    /// use extenders::MailAddress;
    ///
    /// let addr = MailAddress::parse("Jane <jane@example.com>").unwrap();
    /// assert_eq!(addr.address(), "jane@example.com");
    /// assert_eq!(addr.display_name(), Some("Jane"));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ExtenderError::MailAddress("empty input".to_string()));
        }

        let (display_name, addr_spec) = if let Some(rest) = trimmed.strip_suffix('>') {
            let open = rest.rfind('<').ok_or_else(|| {
                ExtenderError::MailAddress("unmatched '>' in input".to_string())
            })?;
            let name = rest[..open].trim();
            let name = name
                .strip_prefix('"')
                .and_then(|n| n.strip_suffix('"'))
                .unwrap_or(name);
            let name = (!name.is_empty()).then(|| name.to_string());
            (name, rest[open + 1..].trim())
        } else {
            (None, trimmed)
        };

        let (local, domain) = addr_spec.split_once('@').ok_or_else(|| {
            ExtenderError::MailAddress(format!("missing '@' in '{addr_spec}'"))
        })?;

        if local.is_empty() || local.chars().any(|c| c.is_whitespace() || c == '<' || c == '>') {
            return Err(ExtenderError::MailAddress(format!(
                "invalid local part in '{addr_spec}'"
            )));
        }
        if domain.is_empty()
            || domain
                .chars()
                .any(|c| c.is_whitespace() || c == '@' || c == '<' || c == '>')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(ExtenderError::MailAddress(format!(
                "invalid domain in '{addr_spec}'"
            )));
        }

        Ok(MailAddress {
            display_name,
            local: local.to_string(),
            domain: domain.to_string(),
        })
    }

    /// The canonical `local@domain` form, with no display name
    pub fn address(&self) -> String {
        format!("{}@{}", self.local, self.domain)
    }

    /// The display name, if the input carried one
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The part before the `@`
    pub fn local(&self) -> &str {
        &self.local
    }

    /// The part after the `@`
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for MailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "\"{}\" <{}@{}>", name, self.local, self.domain),
            None => write!(f, "{}@{}", self.local, self.domain),
        }
    }
}

/// Check that a string is a canonically-formatted email address
///
/// The input is accepted only when the lenient parse reproduces the input
/// exactly. An address with surrounding whitespace or a display name is
/// parseable but not canonical, and is rejected. Parse failures never
/// escape; they simply report `false`.
///
/// # Example
///
/// ```rust
/// use extenders::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@example.com ")); // not canonical
/// assert!(!is_valid_email("not an email"));
/// ```
pub fn is_valid_email(input: &str) -> bool {
    MailAddress::parse(input).is_ok_and(|addr| addr.address() == input)
}

/// Check that a string is an absolute `http` or `https` URL
///
/// All other schemes and relative references report `false`.
///
/// # Example
///
/// ```rust
/// use extenders::is_valid_url;
///
/// assert!(is_valid_url("https://example.com"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url("example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_address() {
        let addr = MailAddress::parse("user@example.com").unwrap();
        assert_eq!(addr.local(), "user");
        assert_eq!(addr.domain(), "example.com");
        assert_eq!(addr.display_name(), None);
        assert_eq!(addr.address(), "user@example.com");
    }

    #[test]
    fn test_parse_with_display_name() {
        let addr = MailAddress::parse("Jane Doe <jane@example.com>").unwrap();
        assert_eq!(addr.display_name(), Some("Jane Doe"));
        assert_eq!(addr.address(), "jane@example.com");

        let addr = MailAddress::parse("\"Jane Doe\" <jane@example.com>").unwrap();
        assert_eq!(addr.display_name(), Some("Jane Doe"));
        assert_eq!(addr.to_string(), "\"Jane Doe\" <jane@example.com>");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let addr = MailAddress::parse("  user@example.com  ").unwrap();
        assert_eq!(addr.address(), "user@example.com");
    }

    #[test]
    fn test_parse_failures() {
        assert!(MailAddress::parse("").is_err());
        assert!(MailAddress::parse("   ").is_err());
        assert!(MailAddress::parse("no-at-sign").is_err());
        assert!(MailAddress::parse("@example.com").is_err());
        assert!(MailAddress::parse("user@").is_err());
        assert!(MailAddress::parse("us er@example.com").is_err());
        assert!(MailAddress::parse("user@exa mple.com").is_err());
        assert!(MailAddress::parse("user@.example.com").is_err());
        assert!(MailAddress::parse("user@example.com.").is_err());
        assert!(MailAddress::parse("a@b@c").is_err());
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));

        assert!(!is_valid_email("not an email"));
        assert!(!is_valid_email(""));
        // Parseable but not canonical: whitespace and display names survive
        // the lenient parse and are caught by the round-trip comparison.
        assert!(!is_valid_email("user@example.com "));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("Jane <jane@example.com>"));
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1"));
        assert!(is_valid_url("HTTPS://example.com")); // scheme is case-insensitive

        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("file:///etc/hosts"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url(""));
    }
}
