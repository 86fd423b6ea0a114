//! Tag string tokenizer.
//!
//! This module walks a raw annotation string such as
//! `json:"name,omitempty" form:"name"` and produces the ordered list of
//! [`Tag`] entries it contains.
//!
//! ## Overview
//!
//! - **Single pass**: every iteration consumes input or stops, so parsing is
//!   O(n) and always terminates
//! - **Lenient**: malformed input never errors; the tokenizer keeps what it
//!   could read and stops at the first token it cannot start
//! - **Bare keys**: a key not followed by `:` becomes a flag with an empty value
//!
//! Most users should go through [`Tags::parse`](crate::Tags::parse) or the
//! crate-level [`parse`](crate::parse):
//!
//! ```rust
//! use field_tags::{parse, Tag};
//!
//! let tags = parse(r#"json:"name,omitempty" form:"name""#);
//! assert_eq!(tags, vec![Tag::new("json", "name,omitempty"), Tag::new("form", "name")]);
//! ```

use crate::escape::read_quoted;
use crate::options::{ParseOptions, Whitespace};
use crate::Tag;

/// Tokenizer over a single annotation string.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default options. Surrounding whitespace is trimmed.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            input: input.trim(),
            position: 0,
            options,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_separator(&mut self) {
        match self.options.whitespace {
            Whitespace::Single => {
                if self.peek_char() == Some(' ') {
                    self.next_char();
                }
            }
            Whitespace::Any => {
                while self.peek_char().is_some_and(char::is_whitespace) {
                    self.next_char();
                }
            }
        }
    }

    /// Reads characters up to `:`, space, `"` or end of input.
    fn read_key(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .find(|c: char| c == ':' || c == ' ' || c == '"')
            .unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }

    /// Reads an unquoted value up to the next space or end of input.
    fn read_unquoted(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.find(' ').unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }

    fn read_quoted(&mut self) -> String {
        let rest = self.rest();
        let (value, remainder) = read_quoted(rest);
        self.position += rest.len() - remainder.len();
        value
    }

    /// Reads the next entry, or `None` once no further key can be read.
    pub fn next_tag(&mut self) -> Option<Tag> {
        if self.at_end() {
            return None;
        }
        self.skip_separator();

        let key = self.read_key();
        if key.is_empty() {
            if !self.at_end() {
                tracing::trace!(
                    position = self.position,
                    rest = self.rest(),
                    "tag tokenization stopped at empty key"
                );
            }
            self.position = self.input.len();
            return None;
        }

        if self.peek_char() != Some(':') {
            return Some(Tag::flag(key));
        }
        self.next_char();

        let value = if self.peek_char() == Some('"') {
            self.next_char();
            self.read_quoted()
        } else {
            self.read_unquoted().to_string()
        };
        Some(Tag::new(key, value))
    }

    /// Consumes the parser and returns every entry in source order.
    pub fn parse(mut self) -> Vec<Tag> {
        let mut tags = Vec::new();
        while let Some(tag) = self.next_tag() {
            tags.push(tag);
        }
        tags
    }
}

impl Iterator for Parser<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        self.next_tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<Tag> {
        Parser::new(input).parse()
    }

    fn parse_any(input: &str) -> Vec<Tag> {
        Parser::with_options(input, ParseOptions::new().with_whitespace(Whitespace::Any)).parse()
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \t ").is_empty());
    }

    #[test]
    fn test_quoted_values() {
        assert_eq!(
            parse(r#"json:"name,omitempty" form:"name""#),
            vec![Tag::new("json", "name,omitempty"), Tag::new("form", "name")]
        );
    }

    #[test]
    fn test_escaped_comma_kept() {
        let tags = parse(r#"gorm:"index:,class:FULLTEXT,comment:hello \\, world,where:age > 10""#);
        assert_eq!(
            tags,
            vec![Tag::new(
                "gorm",
                "index:,class:FULLTEXT,comment:hello \\, world,where:age > 10"
            )]
        );

        let tags = parse(r#"gorm:"comment:hello \, world""#);
        assert_eq!(tags, vec![Tag::new("gorm", "comment:hello \\, world")]);
    }

    #[test]
    fn test_bare_keys() {
        assert_eq!(parse("required"), vec![Tag::flag("required")]);
        assert_eq!(
            parse(r#"required json:"id" readonly"#),
            vec![Tag::flag("required"), Tag::new("json", "id"), Tag::flag("readonly")]
        );
    }

    #[test]
    fn test_unquoted_values() {
        assert_eq!(
            parse("max:10 min:1"),
            vec![Tag::new("max", "10"), Tag::new("min", "1")]
        );
        assert_eq!(parse("key:"), vec![Tag::new("key", "")]);
        assert_eq!(
            parse("key: other"),
            vec![Tag::new("key", ""), Tag::flag("other")]
        );
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(
            parse(r#"json:"id" db:"user_id"#),
            vec![Tag::new("json", "id"), Tag::new("db", "user_id")]
        );
    }

    #[test]
    fn test_adjacent_tokens_without_space() {
        assert_eq!(
            parse(r#"a:"1"b:"2""#),
            vec![Tag::new("a", "1"), Tag::new("b", "2")]
        );
    }

    #[test]
    fn test_empty_key_stops() {
        assert_eq!(parse(r#"a:"1" :"x" b:"2""#), vec![Tag::new("a", "1")]);
        assert_eq!(parse(r#""quoted" a:"1""#), Vec::<Tag>::new());
        // Key directly followed by a quote is a flag, then the quote stops parsing.
        assert_eq!(parse(r#"key"x" b:"2""#), vec![Tag::flag("key")]);
    }

    #[test]
    fn test_single_space_policy() {
        assert_eq!(parse(r#"a:"1"  b:"2""#), vec![Tag::new("a", "1")]);
    }

    #[test]
    fn test_any_whitespace_policy() {
        assert_eq!(
            parse_any("a:\"1\"  \t b:\"2\""),
            vec![Tag::new("a", "1"), Tag::new("b", "2")]
        );
    }

    #[test]
    fn test_iterator() {
        let keys: Vec<String> = Parser::new("a b:1 c").map(|tag| tag.key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
