//! Field Tag Syntax
//!
//! This module documents the annotation grammar accepted by this library.
//!
//! # Tokens
//!
//! A tag string is a single line of tokens separated by a space:
//!
//! ```text
//! json:"name,omitempty" form:"name" required max:10
//! ```
//!
//! | Token | Example | Entry |
//! |-------|---------|-------|
//! | Quoted | `json:"name,omitempty"` | `json` → `name,omitempty` |
//! | Unquoted | `max:10` | `max` → `10` |
//! | Empty | `key:` | `key` → empty |
//! | Bare | `required` | `required` → empty |
//!
//! **Rules**:
//! - A key runs until `:`, a space, `"` or the end of input
//! - An unquoted value runs until the next space
//! - Leading and trailing whitespace of the whole string is ignored
//! - Keys may repeat; lookups return the first occurrence
//!
//! ## Escapes
//!
//! Inside quoted values:
//!
//! ```text
//! \"  - quote
//! \\  - backslash
//! \n  - newline
//! \r  - carriage return
//! \t  - tab
//! ```
//!
//! Any other backslash sequence is kept as written: `\,` stays `\,`.
//!
//! # Lenient Input
//!
//! Parsing never fails:
//!
//! - A missing closing quote makes the rest of the string the value
//! - A token that cannot start with a key (a leading `:` or `"`) ends parsing
//! - With the default [`Whitespace::Single`](crate::Whitespace::Single) policy
//!   only one space is skipped between tokens, so `a:"1"  b:"2"` yields only
//!   `a`. Use [`Whitespace::Any`](crate::Whitespace::Any) to accept runs of
//!   whitespace.
//!
//! # Compound Values
//!
//! A value can be decomposed with a [`DelimiterConfig`](crate::DelimiterConfig):
//!
//! ```text
//! index:,class:FULLTEXT,comment:hello world,where:age > 10
//! ```
//!
//! With delimiter `,` and separator `:` this yields:
//!
//! | Key | Value |
//! |-----|-------|
//! | `index` | empty |
//! | `class` | `FULLTEXT` |
//! | `comment` | `hello world` |
//! | `where` | `age > 10` |
//!
//! Segments split on the first separator only, so `default:a:b` gives
//! `default` → `a:b`. The delimiter itself cannot be escaped.
