//! # field_tags
//!
//! Parser for the `key:"value"` annotation strings attached to declared fields.
//!
//! ## What is a field tag?
//!
//! A field tag is a single line of `key:"value"` or bare `key` tokens, where
//! each key names a namespace (a serialization format, an ORM, a validator)
//! and the value is that namespace's payload:
//!
//! ```text
//! json:"name,omitempty" form:"name"
//! ```
//!
//! ## Key Features
//!
//! - **Ordered**: entries keep source order and duplicate keys are allowed
//! - **Lenient**: malformed input never errors, it yields what could be read
//! - **Compound values**: decompose `index:,class:FULLTEXT` style values with a
//!   [`DelimiterConfig`]
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use field_tags::{DelimiterConfig, Field, Tags};
//!
//! let field = Field::new("Age", r#"json:"age,omitempty" gorm:"index:,class:FULLTEXT""#);
//! let tags = Tags::from_field(&field);
//!
//! let json = tags.get("json").unwrap();
//! assert_eq!(json.value, "age,omitempty");
//!
//! let gorm = tags.require("gorm").unwrap().delimited(&DelimiterConfig::pairs());
//! assert!(gorm.has_key("index"));
//! assert_eq!(gorm.value("class"), Some("FULLTEXT"));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) single pass, no backtracking
//! - **Lookup**: linear scan, first match wins
//! - **Memory**: only the returned entries are allocated
//!
//! ## Format
//!
//! See the [`syntax`] module for the full grammar and escape table.

pub mod delimited;
pub mod error;
pub mod escape;
pub mod field;
pub mod options;
pub mod parser;
pub mod syntax;
pub mod tags;

pub use delimited::{DelimitedValue, DelimitedValues};
pub use error::{Error, Result};
pub use escape::{escape, unescape};
pub use field::Field;
pub use options::{DelimiterConfig, ParseOptions, Whitespace};
pub use parser::Parser;
pub use tags::{Tag, Tags};

/// Parses a raw tag string into its entries, in source order.
///
/// # Examples
///
/// ```rust
/// use field_tags::{parse, Tag};
///
/// let tags = parse(r#"json:"name,omitempty" form:"name""#);
/// assert_eq!(tags[0], Tag::new("json", "name,omitempty"));
/// assert_eq!(tags[1], Tag::new("form", "name"));
/// ```
#[must_use]
pub fn parse(raw: &str) -> Vec<Tag> {
    Parser::new(raw).parse()
}

/// Parses a raw tag string with custom options.
#[must_use]
pub fn parse_with_options(raw: &str, options: &ParseOptions) -> Vec<Tag> {
    Parser::with_options(raw, options.clone()).parse()
}
