//! Helpers for pulling structured data out of free-form completion text.

use regex::Regex;
use std::sync::LazyLock;

/// First `{` through the last `}`, across newlines.
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("static regex is valid"));

/// Locate the brace-delimited span in a completion, ignoring any prose the
/// model wrapped around it.
///
/// Accepts:
/// - a bare JSON object
/// - an object preceded or followed by commentary
/// - an object inside a fenced code block
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT.find(text).map(|m| m.as_str())
}
