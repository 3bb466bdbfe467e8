//! Canonical identifier encoding
//!
//! Serializes an identifier sequence to the exact JSON text that recorded
//! triggers were computed over: `["a", "b"]` with `", "` separators
//! and every character outside printable ASCII escaped as `\uXXXX`.
//! Matching that text byte-for-byte keeps triggers recorded over the same
//! identifiers valid.
//!
//! The encoding is injective: JSON string quoting cannot conflate
//! `["ab", "c"]` with `["a", "bc"]`.

use std::fmt::Write;

use crate::domain::value_objects::Identifier;

const SEPARATOR: &str = ", ";

/// Encode identifiers as an ASCII-only JSON array
pub fn encode<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a Identifier>,
{
    encode_strs(ids.into_iter().map(Identifier::as_str))
}

/// Encode plain strings as a JSON array, in the same form as [`encode`]
pub fn encode_strs<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::from("[");
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        push_json_string(&mut out, value);
    }
    out.push(']');
    out
}

/// Append `s` as a quoted JSON string with ASCII-only escaping
pub fn push_json_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            ' '..='~' => out.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    // Writing to a String cannot fail.
                    let _ = write!(out, "\\u{:04x}", unit);
                }
            }
        }
    }
    out.push('"');
}
