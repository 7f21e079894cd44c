use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("static regex is valid"));

/// Workforce dashboard rule: spaces become underscores, then everything that
/// is not an ASCII letter, digit or underscore is dropped.
pub fn normalize_identifier(name: &str) -> String {
    NON_IDENTIFIER
        .replace_all(&name.replace(' ', "_"), "")
        .into_owned()
}

/// HR dashboard rule: trim surrounding whitespace only.
pub fn strip_whitespace(name: &str) -> String {
    name.trim().to_string()
}
