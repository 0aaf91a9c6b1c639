//! Unique keying and grouping of domain record collections.
//!
//! Display-data preparation for the UI: `key_by` builds a one-record-per-key
//! lookup (broker id -> broker descriptor), `group_by` buckets records by a
//! shared field value (connectors by type, consumer groups by state). Both
//! borrow from the input collection and never mutate it.

use ahash::AHashMap;
use indexmap::IndexMap;

use crate::records::{field_key, FieldKey, Record};

/// Index records by the value of `property`, one record per key.
///
/// A `None` collection degrades to an empty map rather than erroring.
/// When several records extract the same key, the last one in iteration
/// order wins. Records whose `property` is missing or not key-safe are
/// skipped.
pub fn key_by<'a>(
    records: Option<&'a [Record]>,
    property: &str,
) -> AHashMap<FieldKey, &'a Record> {
    let mut index = AHashMap::new();
    for record in records.unwrap_or_default() {
        if let Some(key) = field_key(record, property) {
            index.insert(key, record);
        }
    }
    index
}

/// Group records by the value of `property`.
///
/// Keys appear in first-seen order and members keep their original
/// relative order within each group. Records whose `property` is missing
/// or not key-safe are silently dropped, so no group is ever empty.
pub fn group_by<'a>(
    records: &'a [Record],
    property: &str,
) -> IndexMap<FieldKey, Vec<&'a Record>> {
    let mut groups: IndexMap<FieldKey, Vec<&Record>> = IndexMap::new();
    for record in records {
        if let Some(key) = field_key(record, property) {
            groups.entry(key).or_default().push(record);
        }
    }
    groups
}
