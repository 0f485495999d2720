//! Canonical regular expression for CELL text.
//!
//! The expression only describes structure: it does not bound run values or
//! dimension counts, and some engines let `$` match before a trailing line
//! break. [`is_match`] adds the line-break rule; the scanner is the real
//! validator.

use regex::Regex;
use std::sync::OnceLock;

pub const PATTERN: &str = r"^[a-z]+(?:[1-9][0-9]*[A-Z]+[a-z]+)*(?:[1-9][0-9]*[A-Z]*)?$";

/// The compiled canonical expression.
pub fn regex() -> &'static Regex {
    static CELL_RE: OnceLock<Regex> = OnceLock::new();
    CELL_RE.get_or_init(|| Regex::new(PATTERN).expect("CELL grammar regex must compile"))
}

/// Structural match of `s`, rejecting any `\r` or `\n`.
pub fn is_match(s: &str) -> bool {
    !s.is_empty() && !s.contains(['\r', '\n']) && regex().is_match(s)
}
