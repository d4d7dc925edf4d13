//! Text normalization applied before line splitting

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading newline run, any `.`, trailing newline run
static LEGACY_STRIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\r\n]+|\.|[\r\n]+$").unwrap());

static EDGE_NEWLINES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\r\n]+|[\r\n]+$").unwrap());

/// Normalize raw dataset text
///
/// Each stripped region is replaced with a single space (not removed) so
/// tokens on either side never merge, then surrounding whitespace is trimmed.
/// With `strip_periods` every literal `.` is treated as a stripped region too.
pub fn normalize(text: &str, strip_periods: bool) -> String {
    let pattern = if strip_periods {
        &*LEGACY_STRIP_PATTERN
    } else {
        &*EDGE_NEWLINES_PATTERN
    };
    pattern.replace_all(text, " ").trim().to_string()
}
