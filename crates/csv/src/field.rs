//! Single-field escaping and the formula-injection guard.
//!
//! A field that starts with `=`, `+`, `-` or `@` would be evaluated as a
//! formula by spreadsheet software, so it is written with a leading `'`.
//! Decoding removes one leading `'` from every field, whoever put it there.

use std::borrow::Cow;

use crate::line::parse_line;

pub const GUARD: char = '\'';
pub const FORMULA_TRIGGERS: [char; 4] = ['=', '+', '-', '@'];

const NEEDS_QUOTES: [char; 4] = [',', '"', '\r', '\n'];

/// Guards and, when needed, quotes one field.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    let guarded = if field.starts_with(FORMULA_TRIGGERS) {
        Cow::Owned(format!("{}{}", GUARD, field))
    } else {
        Cow::Borrowed(field)
    };

    if guarded.contains(NEEDS_QUOTES) {
        Cow::Owned(format!("\"{}\"", guarded.replace('"', "\"\"")))
    } else {
        guarded
    }
}

/// Escapes each field and joins them with `,`.
pub fn escape_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Removes exactly one leading `'`.
pub fn strip_guard(field: &str) -> &str {
    field.strip_prefix(GUARD).unwrap_or(field)
}

/// Inverse of [`escape_field`] for a single escaped field.
pub fn unescape_field(text: &str) -> String {
    let raw = parse_line(text).join(",");
    strip_guard(&raw).to_string()
}
