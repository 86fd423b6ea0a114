//! Backslash escapes inside quoted tag values.
//!
//! The recognised escapes are `\"`, `\\`, `\n`, `\r` and `\t`. Any other
//! backslash sequence is kept verbatim, so `\,` stays `\,`.

/// Escapes a value so it can sit between double quotes in a tag.
///
/// # Examples
///
/// ```rust
/// use field_tags::escape;
///
/// assert_eq!(escape("say \"hi\"\n"), r#"say \"hi\"\n"#);
/// assert_eq!(escape("plain"), "plain");
/// ```
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Decodes every recognised escape in `s`.
///
/// Unlike [`read_quoted`], quotes do not terminate anything here.
///
/// # Examples
///
/// ```rust
/// use field_tags::unescape;
///
/// assert_eq!(unescape(r"a\tb\,c"), "a\tb\\,c");
/// ```
#[must_use]
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            push_escape(&mut out, chars.next());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Reads a quoted value. `s` starts just after the opening quote.
///
/// Returns the decoded value and the text following the closing quote. If no
/// closing quote exists, everything is the value and the remainder is empty.
pub(crate) fn read_quoted(s: &str) -> (String, &str) {
    let mut out = String::new();
    let mut chars = s.char_indices();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '"' => return (out, &s[idx + 1..]),
            '\\' => push_escape(&mut out, chars.next().map(|(_, c)| c)),
            other => out.push(other),
        }
    }
    tracing::trace!(value = %out, "unterminated quoted tag value");
    (out, "")
}

fn push_escape(out: &mut String, next: Option<char>) {
    match next {
        Some('"') => out.push('"'),
        Some('\\') => out.push('\\'),
        Some('n') => out.push('\n'),
        Some('r') => out.push('\r'),
        Some('t') => out.push('\t'),
        Some(other) => {
            // Unknown escape - preserve literally
            out.push('\\');
            out.push(other);
        }
        None => out.push('\\'),
    }
}
