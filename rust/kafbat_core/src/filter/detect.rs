//! Filter-string classification: literal token vs. intended regex.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that signal a user-supplied filter string is (or was meant
/// as) a regular expression rather than a literal token.
const PATTERN_SIGNALS: &str = r"[*()\[\]?+|/]";

// Kept as a Result-shaped Option so a matcher build failure degrades to
// "not a pattern" instead of panicking at first use.
static PATTERN_SIGNALS_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(PATTERN_SIGNALS).ok());

/// Check whether a filter string looks like a regex pattern.
///
/// Heuristic, not a syntax validator: true iff the string contains any of
/// `* ( ) [ ] ? + | /` anywhere. Plain tokens (including ones with `.`,
/// which is common in topic names) are classified as literals. Total for
/// every input — an internal matcher failure yields `false`.
pub fn looks_like_pattern(value: &str) -> bool {
    match PATTERN_SIGNALS_RE.as_ref() {
        Some(re) => re.is_match(value),
        None => false,
    }
}
