//! Configuration for tag parsing and compound value decomposition.
//!
//! This module provides:
//!
//! - [`ParseOptions`]: how the tokenizer treats whitespace between tokens
//! - [`Whitespace`]: the whitespace policy itself
//! - [`DelimiterConfig`]: how a single tag value is split into sub-entries
//!
//! ## Examples
//!
//! ```rust
//! use field_tags::{parse_with_options, DelimiterConfig, ParseOptions, Whitespace};
//!
//! let options = ParseOptions::new().with_whitespace(Whitespace::Any);
//! let tags = parse_with_options(r#"json:"id"   db:"user_id""#, &options);
//! assert_eq!(tags.len(), 2);
//!
//! let config = DelimiterConfig::pairs();
//! assert_eq!(config.delim, ",");
//! assert_eq!(config.key_value_sep, ":");
//! ```

use serde::{Deserialize, Serialize};

/// Whitespace policy applied at each token boundary.
///
/// # Examples
///
/// ```rust
/// use field_tags::{parse, parse_with_options, ParseOptions, Whitespace};
///
/// // Default: only one space is skipped, so a double space ends tokenization.
/// assert_eq!(parse(r#"a:"1"  b:"2""#).len(), 1);
///
/// let options = ParseOptions::new().with_whitespace(Whitespace::Any);
/// assert_eq!(parse_with_options(r#"a:"1"  b:"2""#, &options).len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Whitespace {
    /// Skip exactly one leading space before each token.
    #[default]
    Single,
    /// Skip every leading whitespace character before each token.
    Any,
}

/// Options controlling the tokenizer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub whitespace: Whitespace,
}

impl ParseOptions {
    /// Creates default options (single-space token separation).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the whitespace policy.
    #[must_use]
    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }
}

/// Separators used to decompose one tag value into sub-entries.
///
/// An empty `delim` means the value is not split at all. An empty
/// `key_value_sep` means segments are never split into key and value.
///
/// # Examples
///
/// ```rust
/// use field_tags::DelimiterConfig;
///
/// let config = DelimiterConfig::new(";", "=");
/// assert_eq!(config.delim, ";");
///
/// let config = DelimiterConfig::list().with_key_value_sep(":");
/// assert_eq!(config, DelimiterConfig::pairs());
///
/// assert!(DelimiterConfig::default().delim.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelimiterConfig {
    pub delim: String,
    pub key_value_sep: String,
}

impl DelimiterConfig {
    /// Creates a configuration from a delimiter and key/value separator.
    #[must_use]
    pub fn new(delim: impl Into<String>, key_value_sep: impl Into<String>) -> Self {
        DelimiterConfig {
            delim: delim.into(),
            key_value_sep: key_value_sep.into(),
        }
    }

    /// Comma separated flags, e.g. `name,omitempty`.
    #[must_use]
    pub fn list() -> Self {
        Self::new(",", "")
    }

    /// Comma separated `key:value` pairs, e.g. `index:,class:FULLTEXT`.
    #[must_use]
    pub fn pairs() -> Self {
        Self::new(",", ":")
    }

    /// Sets the segment delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delim: impl Into<String>) -> Self {
        self.delim = delim.into();
        self
    }

    /// Sets the key/value separator applied inside each segment.
    #[must_use]
    pub fn with_key_value_sep(mut self, key_value_sep: impl Into<String>) -> Self {
        self.key_value_sep = key_value_sep.into();
        self
    }

    /// Returns true if values are split into segments.
    #[must_use]
    pub fn splits(&self) -> bool {
        !self.delim.is_empty()
    }
}
