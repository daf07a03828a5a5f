//! Dynamic value tree that synthetic records are built from.
//!
//! Records mix text keys and integer keys at different depths, so they are
//! modelled as a loose tree rather than fixed structs. Two encodings are
//! supported:
//!
//! - serde, as a self-describing tree (strings, sequences, maps). Integer keys
//!   serialize as numbers; a format that only allows string keys (JSON) writes
//!   them as decimal strings and they are parsed back to [`Key::Int`] on load.
//!   The JSON path is lossy for text keys that look like numbers: `Key::Text("7")`
//!   loads back as `Key::Int(7)`. Generated records never contain such keys.
//! - bincode's native `Encode`/`Decode`, which tags every variant and so needs
//!   no guessing.

use bincode::{Decode, Encode};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Map key. Integer keys sort before text keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub enum Key {
    Int(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Value {
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<Key, Value>),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<Key, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::Text(text.to_owned())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

// ── serde ───────────────────────────────────────────────────────────

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Int(n) => serializer.serialize_u64(*n),
            Key::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::List(items) => serializer.collect_seq(items),
            Value::Map(entries) => serializer.collect_map(entries),
        }
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or unsigned integer map key")
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Key, E> {
        Ok(Key::Int(n))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Key, E> {
        u64::try_from(n)
            .map(Key::Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(n), &self))
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Key, E> {
        Ok(match text.parse::<u64>() {
            Ok(n) => Key::Int(n),
            Err(_) => Key::Text(text.to_owned()),
        })
    }

    fn visit_string<E: de::Error>(self, text: String) -> Result<Key, E> {
        Ok(match text.parse::<u64>() {
            Ok(n) => Key::Int(n),
            Err(_) => Key::Text(text),
        })
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, sequence or map")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Value, E> {
        Ok(Value::Text(text.to_owned()))
    }

    fn visit_string<E: de::Error>(self, text: String) -> Result<Value, E> {
        Ok(Value::Text(text))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<Key, Value>()? {
            entries.insert(key, value);
        }
        Ok(Value::Map(entries))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        let mut inner = BTreeMap::new();
        inner.insert(Key::Int(3), Value::from("Lorem"));
        inner.insert(
            Key::Int(4),
            Value::List(vec![Value::from("Ipsum dolor"), Value::from("Sit")]),
        );
        let mut outer = BTreeMap::new();
        outer.insert(Key::from("Donec"), Value::Map(inner));
        Value::Map(outer)
    }

    #[test]
    fn int_keys_sort_before_text_keys() {
        assert!(Key::Int(u64::MAX) < Key::from("a"));
        assert!(Key::Int(1) < Key::Int(2));
    }

    #[test]
    fn json_writes_int_keys_as_strings() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"Donec":{"3":"Lorem","4":["Ipsum dolor","Sit"]}}"#);
    }

    #[test]
    fn json_reads_numeric_keys_back_as_int() {
        let value: Value = serde_json::from_str(r#"{"7":"a","b":["c"]}"#).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get(&Key::Int(7)), Some(&Value::from("a")));
        assert_eq!(
            map.get(&Key::from("b")),
            Some(&Value::List(vec![Value::from("c")]))
        );
    }

    #[test]
    fn numeric_text_key_is_lossy_in_json_only() {
        let mut entries = BTreeMap::new();
        entries.insert(Key::from("7"), Value::from("x"));
        let value = Value::Map(entries);

        let json = serde_json::to_vec(&value).unwrap();
        let from_json: Value = serde_json::from_slice(&json).unwrap();
        let map = from_json.as_map().unwrap();
        assert_eq!(map.get(&Key::Int(7)), Some(&Value::from("x")));
        assert!(map.get(&Key::from("7")).is_none());

        let config = bincode::config::standard();
        let bytes = bincode::encode_to_vec(value.clone(), config).unwrap();
        let (from_bincode, _): (Value, usize) =
            bincode::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(from_bincode, value);
    }

    #[test]
    fn json_rejects_scalars_other_than_strings() {
        assert!(serde_json::from_str::<Value>("42").is_err());
        assert!(serde_json::from_str::<Value>("null").is_err());
    }

    #[test]
    fn bincode_round_trip() {
        let config = bincode::config::standard();
        let bytes = bincode::encode_to_vec(sample(), config).unwrap();
        let (decoded, read): (Value, usize) = bincode::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(read, bytes.len());
        assert_eq!(decoded, sample());
    }

    #[test]
    fn accessors_match_variant() {
        let value = sample();
        assert!(value.as_map().is_some());
        assert!(value.as_list().is_none());
        assert!(value.as_text().is_none());
        assert_eq!(Value::from("x").as_text(), Some("x"));
    }
}
