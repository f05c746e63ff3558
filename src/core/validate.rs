use std::sync::LazyLock;

use regex::Regex;

pub const SEPARATOR: &str = "->";
pub const NAME_PATTERN: &str = "[A-Za-z0-9_]+";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{NAME_PATTERN}$")).expect("name pattern is valid"));

/// Whether `token` is a legal package name: one or more ASCII letters,
/// digits or underscores, and nothing else.
pub fn is_valid_name(token: &str) -> bool {
    NAME_RE.is_match(token)
}

pub fn is_separator(token: &str) -> bool {
    token == SEPARATOR
}
