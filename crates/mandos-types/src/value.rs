use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// A fragment of a fixture document with its original ordering intact.
///
/// Lists and objects keep their items in the order they were written so a
/// loaded document can be written back unchanged. Object keys are carried
/// only for that purpose: they never contribute to an interpreted value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderedValue {
    /// A raw value expression, e.g. `"u32:5"` or `"str:abc|0x01"`.
    Text(String),
    /// An ordered list of sub-values.
    Sequence(Vec<OrderedValue>),
    /// Key/value pairs in insertion order. Duplicate keys are kept.
    Mapping(Vec<(OrderedValue, OrderedValue)>),
    /// A bare JSON boolean. Loadable, but not a value expression.
    Bool(bool),
}

impl OrderedValue {
    /// Shorthand for a `Text` node.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Build a `Mapping` from `(key, value)` string pairs.
    pub fn mapping<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, OrderedValue)>,
    {
        Self::Mapping(
            pairs
                .into_iter()
                .map(|(k, v)| (Self::Text(k.into()), v))
                .collect(),
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The raw string of a `Text` node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// First value in a `Mapping` whose key is the text `key`.
    pub fn mapping_get(&self, key: &str) -> Option<&OrderedValue> {
        match self {
            Self::Mapping(pairs) => pairs
                .iter()
                .find(|(k, _)| k.as_text() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Human-readable name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Sequence(_) => "list",
            Self::Mapping(_) => "map",
            Self::Bool(_) => "boolean",
        }
    }
}

impl From<&str> for OrderedValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OrderedValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<OrderedValue>> for OrderedValue {
    fn from(items: Vec<OrderedValue>) -> Self {
        Self::Sequence(items)
    }
}

/// Compact single-line JSON.
impl fmt::Display for OrderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

// ── Serialization ─────────────────────────────────────────────────────

impl Serialize for OrderedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (key, value) in pairs {
                    // JSON keys must be strings
                    match key {
                        Self::Text(k) => map.serialize_entry(k, value)?,
                        other => map.serialize_entry(&other.to_string(), value)?,
                    }
                }
                map.end()
            }
        }
    }
}

struct OrderedValueVisitor;

impl<'de> Visitor<'de> for OrderedValueVisitor {
    type Value = OrderedValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, boolean, list or map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<OrderedValue, E> {
        Ok(OrderedValue::Bool(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<OrderedValue, E> {
        Ok(OrderedValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<OrderedValue, E> {
        Ok(OrderedValue::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<OrderedValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(OrderedValue::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<OrderedValue, A::Error> {
        let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, OrderedValue>()? {
            pairs.push((OrderedValue::Text(key), value));
        }
        Ok(OrderedValue::Mapping(pairs))
    }
}

impl<'de> Deserialize<'de> for OrderedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderedValueVisitor)
    }
}
