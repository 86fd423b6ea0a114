//! Field identity supplied alongside raw annotation text.

use serde::{Deserialize, Serialize};

/// A declared field and its raw annotation string.
///
/// The name is opaque to the parser and only used for diagnostics.
///
/// # Examples
///
/// ```rust
/// use field_tags::{Field, Tags};
///
/// let field = Field::new("Name", r#"json:"name,omitempty" form:"name""#);
/// let tags = Tags::from_field(&field);
///
/// assert_eq!(tags.field(), Some("Name"));
/// assert_eq!(tags.lookup("form"), Some("name"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub tag: String,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            tag: tag.into(),
        }
    }
}
