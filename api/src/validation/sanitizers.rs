//! Input sanitization functions
//!
//! Cleanup applied to inbound strings before validation. Values are echoed
//! back by most handlers, so sanitization stays conservative: whitespace
//! and control characters only, never content rewriting.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Pattern to match runs of whitespace
    static ref MULTI_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    /// Pattern to match control characters (except newline and tab)
    static ref CONTROL_CHARS: Regex = Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap();
}

/// Trim leading and trailing whitespace from a string
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Trim a string in-place, dropping it entirely when only whitespace remains
pub fn trim_optional(value: &mut Option<String>) {
    if let Some(ref mut s) = value {
        *s = s.trim().to_string();
        if s.is_empty() {
            *value = None;
        }
    }
}

/// Collapse runs of whitespace into single spaces
pub fn normalize_whitespace(value: &str) -> String {
    MULTI_WHITESPACE.replace_all(value.trim(), " ").to_string()
}

/// Remove control characters from a string
pub fn remove_control_chars(value: &str) -> String {
    CONTROL_CHARS.replace_all(value, "").to_string()
}

/// Sanitize a name-like field: trim, drop control chars, collapse whitespace
pub fn sanitize_name(name: &str) -> String {
    let no_control = remove_control_chars(name.trim());
    normalize_whitespace(&no_control)
}
