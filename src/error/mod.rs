//! Error types for the extenders crate
//!
//! Most helpers in this crate deliberately do not error: the validators
//! report `false` and the enum parser falls back to the default member.
//! The serializers and the secure-string unmarshal are the exceptions, and
//! their failures surface through [`ExtenderError`].

use thiserror::Error;

/// Main error type for the extenders crate
#[derive(Error, Debug, Clone)]
pub enum ExtenderError {
    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    Json(String),

    /// XML serialization or deserialization failed
    #[error("XML error: {0}")]
    Xml(String),

    /// The input could not be parsed as a mail address
    #[error("Invalid mail address: {0}")]
    MailAddress(String),

    /// Secure-string contents were not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(String),

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

/// Type alias for Results using ExtenderError
pub type Result<T> = std::result::Result<T, ExtenderError>;

impl ExtenderError {
    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        ExtenderError::Custom(msg.into())
    }

    /// Check if this error came from a serializer
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, ExtenderError::Json(_) | ExtenderError::Xml(_))
    }
}

// Implement From traits for easier error conversion
impl From<serde_json::Error> for ExtenderError {
    fn from(error: serde_json::Error) -> Self {
        ExtenderError::Json(error.to_string())
    }
}

impl From<quick_xml::SeError> for ExtenderError {
    fn from(error: quick_xml::SeError) -> Self {
        ExtenderError::Xml(error.to_string())
    }
}

impl From<quick_xml::DeError> for ExtenderError {
    fn from(error: quick_xml::DeError) -> Self {
        ExtenderError::Xml(error.to_string())
    }
}

impl From<std::str::Utf8Error> for ExtenderError {
    fn from(error: std::str::Utf8Error) -> Self {
        ExtenderError::Utf8(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtenderError::MailAddress("missing @".to_string());
        assert_eq!(err.to_string(), "Invalid mail address: missing @");

        let err = ExtenderError::custom("Custom error message");
        assert_eq!(err.to_string(), "Custom error message");
    }

    #[test]
    fn test_error_categories() {
        assert!(ExtenderError::Json("bad".to_string()).is_serialization_error());
        assert!(ExtenderError::Xml("bad".to_string()).is_serialization_error());
        assert!(!ExtenderError::MailAddress("bad".to_string()).is_serialization_error());
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: ExtenderError = json_err.into();
        assert!(matches!(err, ExtenderError::Json(_)));
    }
}
