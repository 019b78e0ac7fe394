//! Ordered JSON loading and writing for fixture documents.
//!
//! The writer uses one canonical layout: 4-space indentation, `"key": value`
//! with a single space, empty containers as `[]` / `{}`, and no trailing
//! newline. Any document already in that layout survives
//! `write(&load(text)?)?` byte-for-byte.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{OrderedValue, TreeResult};

const INDENT: &[u8] = b"    ";

/// Load fixture text into an ordered tree.
pub fn load(text: &str) -> TreeResult<OrderedValue> {
    Ok(serde_json::from_str(text)?)
}

/// Load fixture bytes (as read from disk) into an ordered tree.
pub fn load_slice(bytes: &[u8]) -> TreeResult<OrderedValue> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Render a tree in the canonical fixture layout.
pub fn write(value: &OrderedValue) -> TreeResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_keeps_key_order() {
        let v = load(r#"{"z": "1", "a": "2", "m": "3"}"#).unwrap();
        let keys: Vec<_> = match &v {
            OrderedValue::Mapping(pairs) => {
                pairs.iter().map(|(k, _)| k.as_text().unwrap()).collect()
            }
            _ => panic!("expected map"),
        };
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_load_keeps_duplicate_keys() {
        let v = load(r#"{"a": "1", "a": "2"}"#).unwrap();
        assert_eq!(
            v,
            OrderedValue::mapping([("a", OrderedValue::text("1")), ("a", OrderedValue::text("2"))])
        );
    }

    #[test]
    fn test_load_rejects_numbers_and_null() {
        assert!(load(r#"{"a": 5}"#).is_err());
        assert!(load(r#"["x", null]"#).is_err());
    }

    #[test]
    fn test_write_empty_containers() {
        assert_eq!(write(&OrderedValue::Sequence(vec![])).unwrap(), "[]");
        assert_eq!(write(&OrderedValue::Mapping(vec![])).unwrap(), "{}");
    }

    #[test]
    fn test_write_layout() {
        let v = OrderedValue::mapping([
            ("name", OrderedValue::text("str:abc")),
            ("list", OrderedValue::Sequence(vec!["1".into(), OrderedValue::Bool(false)])),
        ]);
        let expected = "{\n    \"name\": \"str:abc\",\n    \"list\": [\n        \"1\",\n        false\n    ]\n}";
        assert_eq!(write(&v).unwrap(), expected);
    }
}
