//! This module provides a set of shared, low-level string helpers used
//! throughout the HTF-INT core.

//==================================================================================
// 1. Core Utility Functions
//==================================================================================

/// Appends `text` to `output` with its first character upper-cased.
///
/// Upper-casing may expand one character into several (e.g. `ß` -> `SS`); the
/// rest of `text` is copied unchanged.
pub fn push_capitalized(output: &mut String, text: &str) {
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        output.extend(first.to_uppercase());
        output.push_str(chars.as_str());
    }
}
