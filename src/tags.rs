//! Ordered collection of parsed tag entries.
//!
//! [`Tags`] keeps the raw annotation text next to the entries parsed from it.
//! Entries stay in source order and duplicate keys are allowed, so lookups
//! always resolve to the first matching entry.
//!
//! ## Examples
//!
//! ```rust
//! use field_tags::{DelimiterConfig, Tags};
//!
//! let mut tags = Tags::parse(r#"json:"name,omitempty" form:"name""#);
//!
//! let json = tags.get("json").unwrap();
//! let parts = json.delimited(&DelimiterConfig::list());
//! assert!(parts.has_key("omitempty"));
//!
//! tags.delete("json");
//! assert_eq!(tags.keys().collect::<Vec<_>>(), vec!["form"]);
//! assert_eq!(tags.raw(), r#"json:"name,omitempty" form:"name""#);
//! ```

use crate::error::{Error, Result, UNKNOWN_FIELD};
use crate::options::{DelimiterConfig, ParseOptions};
use crate::parser::Parser;
use crate::{DelimitedValues, Field};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// A single `key[:value]` entry. `value` is already unescaped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a bare entry with an empty value.
    #[must_use]
    pub fn flag(key: impl Into<String>) -> Self {
        Self::new(key, "")
    }

    /// Returns true if the entry carries no value.
    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.value.is_empty()
    }

    /// Splits this entry's value into sub-entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use field_tags::{DelimiterConfig, Tag};
    ///
    /// let tag = Tag::new("gorm", "index:,class:FULLTEXT");
    /// let parts = tag.delimited(&DelimiterConfig::pairs());
    /// assert_eq!(parts.value("class"), Some("FULLTEXT"));
    /// ```
    #[must_use]
    pub fn delimited(&self, config: &DelimiterConfig) -> DelimitedValues {
        DelimitedValues::parse(&self.value, config.clone())
    }
}

/// The parsed tag entries of one field, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    raw: String,
    field: Option<String>,
    items: Vec<Tag>,
}

impl Tags {
    /// Parses a raw annotation string with default options.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_options(raw, &ParseOptions::default())
    }

    /// Parses a raw annotation string with custom options.
    #[must_use]
    pub fn parse_with_options(raw: &str, options: &ParseOptions) -> Self {
        Tags {
            raw: raw.to_string(),
            field: None,
            items: Parser::with_options(raw, options.clone()).parse(),
        }
    }

    /// Parses the annotation of `field`, remembering its name for diagnostics.
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        Self::from_field_with_options(field, &ParseOptions::default())
    }

    #[must_use]
    pub fn from_field_with_options(field: &Field, options: &ParseOptions) -> Self {
        let mut tags = Self::parse_with_options(&field.tag, options);
        tags.field = Some(field.name.clone());
        tracing::debug!(field = %field.name, entries = tags.items.len(), "parsed field tags");
        tags
    }

    /// Parses raw annotation bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUtf8`] if the bytes are not valid UTF-8.
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        let raw = std::str::from_utf8(raw).map_err(|e| Error::invalid_utf8(&e.to_string()))?;
        Ok(Self::parse(raw))
    }

    /// The original annotation text, unchanged by [`Tags::delete`].
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The field name this collection was built for, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }

    /// Keys in source order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|tag| tag.key.as_str())
    }

    /// Index of the first entry with `key`.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|tag| tag.key == key)
    }

    /// Returns the first entry with `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.position(key).map(|idx| &self.items[idx])
    }

    /// Returns the value of the first entry with `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(|tag| tag.value.as_str())
    }

    /// Returns every entry with `key`, in source order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.items.iter().filter(move |tag| tag.key == key)
    }

    /// Returns the first entry with `key`, or an error naming the field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if no entry has `key`.
    pub fn require(&self, key: &str) -> Result<&Tag> {
        self.get(key).ok_or_else(|| {
            Error::missing_key(self.field.as_deref().unwrap_or(UNKNOWN_FIELD), key)
        })
    }

    /// Removes the first entry with `key`, keeping the order of the rest.
    ///
    /// Absent keys are a no-op.
    pub fn delete(&mut self, key: &str) -> Option<Tag> {
        let idx = self.position(key)?;
        Some(self.items.remove(idx))
    }

    /// Maps each distinct key to its first value, in first-appearance order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use field_tags::Tags;
    ///
    /// let tags = Tags::parse(r#"json:"a" form:"b" json:"c""#);
    /// let namespaces = tags.namespaces();
    /// assert_eq!(namespaces.len(), 2);
    /// assert_eq!(namespaces["json"], "a");
    /// ```
    #[must_use]
    pub fn namespaces(&self) -> IndexMap<&str, &str> {
        let mut map = IndexMap::with_capacity(self.items.len());
        for tag in &self.items {
            map.entry(tag.key.as_str()).or_insert(tag.value.as_str());
        }
        map
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Tags {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl From<&str> for Tags {
    fn from(raw: &str) -> Self {
        Tags::parse(raw)
    }
}

impl From<&Field> for Tags {
    fn from(field: &Field) -> Self {
        Tags::from_field(field)
    }
}

impl FromStr for Tags {
    type Err = Infallible;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Tags::parse(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_first_match() {
        let tags = Tags::parse(r#"json:"first" form:"x" json:"second""#);
        assert_eq!(tags.get("json"), Some(&Tag::new("json", "first")));
        assert_eq!(tags.position("form"), Some(1));
        assert_eq!(tags.get_all("json").count(), 2);
    }

    #[test]
    fn test_get_missing_leaves_collection() {
        let tags = Tags::parse(r#"json:"id""#);
        let before = tags.clone();
        assert!(tags.get("xml").is_none());
        assert_eq!(tags, before);
    }

    #[test]
    fn test_delete_first_only() {
        let mut tags = Tags::parse(r#"a:"1" b:"2" a:"3" c:"4""#);
        assert_eq!(tags.delete("a"), Some(Tag::new("a", "1")));
        assert_eq!(
            tags.iter().cloned().collect::<Vec<_>>(),
            vec![Tag::new("b", "2"), Tag::new("a", "3"), Tag::new("c", "4")]
        );
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut tags = Tags::parse(r#"a:"1" b:"2""#);
        let before = tags.clone();
        assert_eq!(tags.delete("z"), None);
        assert_eq!(tags, before);
    }

    #[test]
    fn test_require() {
        let tags = Tags::from_field(&Field::new("Age", r#"gorm:"index""#));
        assert!(tags.require("gorm").is_ok());
        assert_eq!(tags.require("json"), Err(Error::missing_key("Age", "json")));

        let tags = Tags::parse("");
        assert_eq!(
            tags.require("json"),
            Err(Error::missing_key(UNKNOWN_FIELD, "json"))
        );
    }

    #[test]
    fn test_from_slice_invalid_utf8() {
        assert!(matches!(
            Tags::from_slice(&[0x6a, 0xff, 0xfe]),
            Err(Error::InvalidUtf8(_))
        ));
        assert_eq!(Tags::from_slice(b"json:\"id\"").unwrap().lookup("json"), Some("id"));
    }

    #[test]
    fn test_is_flag() {
        let tags = Tags::parse(r#"required json:"id""#);
        assert!(tags.get("required").unwrap().is_flag());
        assert!(!tags.get("json").unwrap().is_flag());
    }
}
