//! Decomposition of compound tag values.
//!
//! A value such as `index:,class:FULLTEXT,comment:hello world` is split on the
//! configured delimiter, then each segment is optionally split once on the
//! key/value separator. The delimiter is never escaped: a segment that
//! contains it literally is split like any other.
//!
//! ## Examples
//!
//! ```rust
//! use field_tags::{DelimitedValue, DelimitedValues, DelimiterConfig};
//!
//! let values = DelimitedValues::parse(
//!     "index:,class:FULLTEXT,comment:hello world,where:age > 10",
//!     DelimiterConfig::pairs(),
//! );
//!
//! assert_eq!(values.len(), 4);
//! assert_eq!(values.get("index"), Some(&DelimitedValue::new("index", "")));
//! assert_eq!(values.value("where"), Some("age > 10"));
//! ```

use crate::error::{Error, Result, UNKNOWN_FIELD};
use crate::options::DelimiterConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One segment of a decomposed value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelimitedValue {
    pub key: String,
    pub value: String,
}

impl DelimitedValue {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        DelimitedValue {
            key: key.into(),
            value: value.into(),
        }
    }

    fn from_segment(segment: &str, key_value_sep: &str) -> Self {
        if !key_value_sep.is_empty() {
            if let Some((key, value)) = segment.split_once(key_value_sep) {
                return Self::new(key, value);
            }
        }
        Self::new(segment, "")
    }
}

/// The ordered segments of one tag value, with the config that produced them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimitedValues {
    config: DelimiterConfig,
    items: Vec<DelimitedValue>,
}

impl DelimitedValues {
    /// Splits `value` according to `config`.
    ///
    /// With an empty delimiter the whole value becomes a single key.
    #[must_use]
    pub fn parse(value: &str, config: DelimiterConfig) -> Self {
        let items = if config.splits() {
            value
                .split(config.delim.as_str())
                .map(|segment| DelimitedValue::from_segment(segment, &config.key_value_sep))
                .collect()
        } else {
            vec![DelimitedValue::new(value, "")]
        };
        DelimitedValues { config, items }
    }

    #[must_use]
    pub fn config(&self) -> &DelimiterConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DelimitedValue> {
        self.items.iter()
    }

    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.items.iter().any(|item| item.key == key)
    }

    /// Returns the first segment with `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DelimitedValue> {
        self.items.iter().find(|item| item.key == key)
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|item| item.value.as_str())
    }

    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if no segment has `key`.
    pub fn require(&self, key: &str) -> Result<&DelimitedValue> {
        self.get(key).ok_or_else(|| Error::missing_key(UNKNOWN_FIELD, key))
    }

    /// Collects segments into a map; the first segment wins on duplicate keys.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<&str, &str> {
        let mut map = IndexMap::with_capacity(self.items.len());
        for item in &self.items {
            map.entry(item.key.as_str()).or_insert(item.value.as_str());
        }
        map
    }
}

impl<'a> IntoIterator for &'a DelimitedValues {
    type Item = &'a DelimitedValue;
    type IntoIter = std::slice::Iter<'a, DelimitedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for DelimitedValues {
    type Item = DelimitedValue;
    type IntoIter = std::vec::IntoIter<DelimitedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &DelimitedValues) -> Vec<(&str, &str)> {
        values
            .iter()
            .map(|item| (item.key.as_str(), item.value.as_str()))
            .collect()
    }

    #[test]
    fn test_list() {
        let values = DelimitedValues::parse("name,omitempty", DelimiterConfig::list());
        assert_eq!(items(&values), vec![("name", ""), ("omitempty", "")]);
    }

    #[test]
    fn test_pairs() {
        let values = DelimitedValues::parse(
            "index:,class:FULLTEXT,comment:hello world,where:age > 10",
            DelimiterConfig::pairs(),
        );
        assert_eq!(
            items(&values),
            vec![
                ("index", ""),
                ("class", "FULLTEXT"),
                ("comment", "hello world"),
                ("where", "age > 10"),
            ]
        );
        for key in ["index", "class", "comment", "where"] {
            assert!(values.has_key(key));
        }
        assert!(!values.has_key("hello world"));
        assert!(!values.has_key(""));
    }

    #[test]
    fn test_split_on_first_separator() {
        let values = DelimitedValues::parse("default:a:b", DelimiterConfig::pairs());
        assert_eq!(items(&values), vec![("default", "a:b")]);
    }

    #[test]
    fn test_no_delimiter() {
        let values = DelimitedValues::parse("a:1,b:2", DelimiterConfig::new("", ":"));
        assert_eq!(items(&values), vec![("a:1,b:2", "")]);
    }

    #[test]
    fn test_empty_value() {
        let values = DelimitedValues::parse("", DelimiterConfig::list());
        assert_eq!(items(&values), vec![("", "")]);
    }

    #[test]
    fn test_literal_delimiter_splits() {
        let values = DelimitedValues::parse(r"comment:hello \, world", DelimiterConfig::pairs());
        assert_eq!(
            items(&values),
            vec![("comment", "hello \\"), (" world", "")]
        );
    }

    #[test]
    fn test_to_map_first_wins() {
        let values = DelimitedValues::parse("a:1,b:2,a:3", DelimiterConfig::pairs());
        let map = values.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&"1"));
        assert_eq!(values.require("b").map(|v| v.value.as_str()), Ok("2"));
        assert!(values.require("c").is_err());
    }
}
