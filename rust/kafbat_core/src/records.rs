//! Domain record and field-key types shared across kafbat_core modules.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;

/// One structured domain record (broker descriptor, connector row, topic
/// descriptor, ...) as delivered by the HTTP/query layer — a JSON object
/// of uniform shape within a collection.
pub type Record = Map<String, Value>;

/// A key-safe extracted field value — the only JSON value types usable as
/// a mapping key. Anything else (null, bool, array, object, or a missing
/// field) is not key-safe and falls under the indexers' skip policy.
///
/// Serializes untagged, so a keyed mapping round-trips to the plain
/// `{"100": ...}` / `{"a": ...}` object shape the UI expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FieldKey {
    Text(String),
    Num(Number),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Text(s) => f.write_str(s),
            FieldKey::Num(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        FieldKey::Text(s.to_string())
    }
}

impl From<i64> for FieldKey {
    fn from(n: i64) -> Self {
        FieldKey::Num(Number::from(n))
    }
}

/// Extract the key-safe value of `property` from a record.
///
/// Returns `None` when the field is missing or its value is not a string
/// or a number; callers apply their documented skip policy to `None`
/// instead of erroring.
pub fn field_key(record: &Record, property: &str) -> Option<FieldKey> {
    match record.get(property) {
        Some(Value::String(s)) => Some(FieldKey::Text(s.clone())),
        Some(Value::Number(n)) => Some(FieldKey::Num(n.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value
            .as_object()
            .cloned()
            .expect("test records are JSON objects")
    }

    #[test]
    fn string_and_number_fields_are_key_safe() {
        let rec = record(json!({ "host": "b-1", "id": 100 }));
        assert_eq!(field_key(&rec, "host"), Some(FieldKey::from("b-1")));
        assert_eq!(field_key(&rec, "id"), Some(FieldKey::from(100)));
    }

    #[test]
    fn other_types_and_missing_fields_are_not() {
        let rec = record(json!({
            "online": true,
            "tags": ["a"],
            "config": {},
            "gone": null
        }));
        assert_eq!(field_key(&rec, "online"), None);
        assert_eq!(field_key(&rec, "tags"), None);
        assert_eq!(field_key(&rec, "config"), None);
        assert_eq!(field_key(&rec, "gone"), None);
        assert_eq!(field_key(&rec, "missing"), None);
    }

    #[test]
    fn field_key_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&FieldKey::from("a")).unwrap(),
            "\"a\""
        );
        assert_eq!(serde_json::to_string(&FieldKey::from(100)).unwrap(), "100");
    }

    #[test]
    fn display_matches_raw_value() {
        assert_eq!(FieldKey::from("broker-1").to_string(), "broker-1");
        assert_eq!(FieldKey::from(42).to_string(), "42");
    }
}
