//! Render options back into `set` directive syntax
//!
//! Output of [`print`] fed through the directive parser yields the same key
//! and value. Booleans use presence/`no` prefix instead of `=true`/`=false`.

use super::registry::OptionsRegistry;
use super::types::OptionValue;

/// Render a single option as a `set` token, e.g. `limit=50`, `nocenter`
pub fn print(key: &str, value: &OptionValue) -> String {
    match value {
        OptionValue::String(v) => format!("{}=\"{}\"", key, escape(v)),
        OptionValue::Int(v) => format!("{}={}", key, v),
        OptionValue::Bool(true) => key.to_string(),
        OptionValue::Bool(false) => format!("no{}", key),
    }
}

/// Render a full `set` line
pub fn print_set(key: &str, value: &OptionValue) -> String {
    format!("set {}", print(key, value))
}

/// Render every registered option as a `set` line, sorted by key
pub fn dump(registry: &OptionsRegistry) -> String {
    registry
        .list()
        .iter()
        .map(|(key, value)| print_set(key, value) + "\n")
        .collect()
}

/// Escape a string for use between double quotes
///
/// Backslash and double quote are prefixed with a backslash; nothing else is
/// touched.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Quote a directive token when it would not survive tokenizing as is
pub fn quote_token(token: &str) -> String {
    if token.is_empty() || token.contains(|c: char| c.is_whitespace() || c == '"') {
        format!("\"{}\"", escape(token))
    } else {
        token.to_string()
    }
}
