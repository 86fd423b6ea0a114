//! Error types for field tag lookups.
//!
//! Parsing itself never fails: malformed annotation text degrades to whatever
//! entries could be read. Errors only come from the fallible convenience
//! surfaces layered on top of the parser:
//!
//! - **Missing keys**: [`Tags::require`](crate::Tags::require) and
//!   [`DelimitedValues::require`](crate::DelimitedValues::require)
//! - **Invalid input bytes**: [`Tags::from_slice`](crate::Tags::from_slice)
//!
//! ## Examples
//!
//! ```rust
//! use field_tags::{Error, Field, Tags};
//!
//! let tags = Tags::from_field(&Field::new("Name", r#"json:"name""#));
//! let err = tags.require("form").unwrap_err();
//!
//! assert!(matches!(err, Error::MissingKey { .. }));
//! assert!(err.to_string().contains("Name"));
//! ```

use std::fmt;
use thiserror::Error;

/// Field identity reported when a collection was parsed from a bare string.
pub const UNKNOWN_FIELD: &str = "<unknown>";

/// Represents all errors produced by the fallible tag lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required key was not present
    #[error("field {field}: missing tag key `{key}`")]
    MissingKey { field: String, key: String },

    /// Raw tag bytes were not valid UTF-8
    #[error("invalid UTF-8 in tag: {0}")]
    InvalidUtf8(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a missing key error for the given field identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use field_tags::Error;
    ///
    /// let err = Error::missing_key("Age", "gorm");
    /// assert_eq!(err.to_string(), "field Age: missing tag key `gorm`");
    /// ```
    pub fn missing_key(field: &str, key: &str) -> Self {
        Error::MissingKey {
            field: field.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates an invalid UTF-8 error.
    pub fn invalid_utf8(msg: &str) -> Self {
        Error::InvalidUtf8(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err = Error::missing_key(UNKNOWN_FIELD, "json");
        assert_eq!(err.to_string(), "field <unknown>: missing tag key `json`");
    }

    #[test]
    fn test_custom_message() {
        let err = Error::custom(format!("bad {}", 42));
        assert_eq!(err, Error::Custom("bad 42".to_string()));
        assert_eq!(err.to_string(), "bad 42");
    }
}
