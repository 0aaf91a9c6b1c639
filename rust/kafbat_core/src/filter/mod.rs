//! Filter-string matching over record collections (literal + regex).
//!
//! `build_filter()` classifies the user's search string with
//! `detect::looks_like_pattern` and selects either a memchr-backed
//! substring matcher or a compiled regex for the downstream match.

pub mod detect;

use memchr::memmem;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::records::Record;
use detect::looks_like_pattern;

/// Matching strategy for a user-supplied filter string.
pub enum FilterMode {
    /// Case-sensitive substring match using memchr.
    Contains { needle: String },
    /// Case-insensitive substring match.
    ContainsIgnoreCase { needle_lower: String },
    /// Compiled regex for pattern-like filter strings.
    Pattern(Regex),
}

fn literal(query: &str, ignore_case: bool) -> FilterMode {
    if ignore_case {
        FilterMode::ContainsIgnoreCase {
            needle_lower: query.to_lowercase(),
        }
    } else {
        FilterMode::Contains {
            needle: query.to_string(),
        }
    }
}

/// Build a `FilterMode` from a filter string, propagating regex compile
/// errors for pattern-like queries.
pub fn try_build_filter(query: &str, ignore_case: bool) -> Result<FilterMode, regex::Error> {
    if looks_like_pattern(query) {
        let regex = RegexBuilder::new(query)
            .case_insensitive(ignore_case)
            .build()?;
        Ok(FilterMode::Pattern(regex))
    } else {
        Ok(literal(query, ignore_case))
    }
}

/// Build a `FilterMode` from a filter string.
///
/// Total variant for the UI path: a pattern-like query that fails to
/// compile degrades to a literal substring match instead of erroring.
pub fn build_filter(query: &str, ignore_case: bool) -> FilterMode {
    try_build_filter(query, ignore_case).unwrap_or_else(|_| literal(query, ignore_case))
}

impl FilterMode {
    /// Test a single haystack against the filter.
    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            FilterMode::Contains { needle } => {
                memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
            }
            FilterMode::ContainsIgnoreCase { needle_lower } => {
                let haystack_lower = haystack.to_lowercase();
                memmem::find(haystack_lower.as_bytes(), needle_lower.as_bytes()).is_some()
            }
            FilterMode::Pattern(regex) => regex.is_match(haystack),
        }
    }
}

/// Filter records on the string value of `property`.
///
/// Records whose `property` is missing or not a string are skipped, same
/// policy as the indexers.
pub fn filter_records<'a>(
    records: &'a [Record],
    property: &str,
    mode: &FilterMode,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| match record.get(property) {
            Some(Value::String(s)) => mode.matches(s),
            _ => false,
        })
        .collect()
}
