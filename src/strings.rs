//! String helpers for endpoint URIs, language names and tabular data
//!
//! Everything in here is pure and total: missing or empty input produces a
//! conservative answer (`false`, `""`, `None` or the input unchanged)
//! instead of an error.

use std::collections::HashMap;

/// File extensions that may carry Camel routes
pub const DSL_FILE_EXTENSIONS: &[&str] = &["java", "xml"];

/// A single row of tabular data, e.g. one option of a component model
pub type Row = HashMap<String, String>;

// ============================================================================
// Endpoint URIs
// ============================================================================

/// Does the endpoint URI carry query parameters?
///
/// Accepts either a `&str` or an `Option<&str>`; `None` and `""` are false.
pub fn has_query_marker<'a>(uri: impl Into<Option<&'a str>>) -> bool {
    match uri.into() {
        Some(uri) => !uri.is_empty() && uri.contains('?'),
        None => false,
    }
}

/// Component name of an endpoint URI, the part before the first `:`
///
/// The name is not checked against any catalog of known components.
pub fn component_name(uri: &str) -> Option<&str> {
    uri.split_once(':').map(|(name, _)| name)
}

// ============================================================================
// Language names
// ============================================================================

/// Canonical name for an expression language alias
///
/// `tokenizeXml` and friends collapse to `tokenize`, `js` and `javascript`
/// map to `javaScript`. Anything else is returned as-is.
pub fn canonical_language_name(name: &str) -> &str {
    if name.starts_with("tokenize") {
        "tokenize"
    } else if name.eq_ignore_ascii_case("js") || name.eq_ignore_ascii_case("javascript") {
        "javaScript"
    } else {
        name
    }
}

// ============================================================================
// Tabular data
// ============================================================================

/// Value for `key` in the row, or `""` when the row has no such key
pub fn safe_value<'a>(key: &str, row: &'a Row) -> &'a str {
    row.get(key).map(String::as_str).unwrap_or("")
}

/// Value for `key` from the first row that has it, or `""`
pub fn safe_value_in<'a>(key: &str, rows: &'a [Row]) -> &'a str {
    rows.iter()
        .find_map(|row| row.get(key))
        .map(String::as_str)
        .unwrap_or("")
}

// ============================================================================
// Formatting
// ============================================================================

/// Wrap `text` into lines at occurrences of `separator`
///
/// Tokens after the first keep their leading separator, so removing every
/// inserted `line_break` gives back the original text. A line is broken
/// before a token when adding that token would push the line past
/// `max_width`. Line width is the summed length of the token payloads;
/// the re-attached separators are not counted. A token is never split, so a
/// single over-long token gets a line of its own.
///
/// Text without the separator is returned unchanged.
pub fn wrap_separator(text: &str, separator: &str, line_break: &str, max_width: usize) -> String {
    if text.is_empty() || separator.is_empty() || !text.contains(separator) {
        return text.to_string();
    }

    let mut wrapped = String::with_capacity(text.len() + line_break.len() * 4);
    let mut width = 0;

    for (i, part) in text.split(separator).enumerate() {
        let part_width = part.chars().count();
        if i > 0 {
            if width > 0 && width + part_width > max_width {
                wrapped.push_str(line_break);
                width = 0;
            }
            wrapped.push_str(separator);
        }
        wrapped.push_str(part);
        width += part_width;
    }

    wrapped
}
