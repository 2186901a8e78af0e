//! The document tree every merge operates on.
//!
//! Decoders produce `TreeValue`s (see [`crate::decode`]), the merge engine
//! consumes and builds them, and serializers take them back out through the
//! [`Serialize`] impl below.

use crate::error::Result;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// String-keyed mapping used for objects. Key order carries no meaning; the
/// `BTreeMap` keeps serialized output deterministic.
pub type Object = BTreeMap<String, TreeValue>;

/// A decoded YAML/JSON document value.
///
/// Mirrors JSON types but separates integers from floats, because schema
/// inference distinguishes `"integer"` from `"number"`. Equality is deep and
/// structural: `Integer(1)` and `Number(1.0)` are different values.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TreeValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    /// A non-whole number, or a whole number that arrived as a float.
    Number(f64),
    String(String),
    Array(Vec<TreeValue>),
    Object(Object),
}

impl TreeValue {
    pub fn as_array(&self) -> Option<&[TreeValue]> {
        match self {
            TreeValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            TreeValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up `key` if this value is an object.
    pub fn get(&self, key: &str) -> Option<&TreeValue> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Serialize as a YAML document.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize as JSON, optionally pretty-printed.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl Serialize for TreeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            TreeValue::Null => serializer.serialize_unit(),
            TreeValue::Boolean(b) => serializer.serialize_bool(*b),
            TreeValue::Integer(n) => serializer.serialize_i64(*n),
            TreeValue::Number(f) => serializer.serialize_f64(*f),
            TreeValue::String(s) => serializer.serialize_str(s),
            TreeValue::Array(items) => serializer.collect_seq(items),
            TreeValue::Object(map) => serializer.collect_map(map),
        }
    }
}

impl From<bool> for TreeValue {
    fn from(b: bool) -> Self {
        TreeValue::Boolean(b)
    }
}

impl From<i64> for TreeValue {
    fn from(n: i64) -> Self {
        TreeValue::Integer(n)
    }
}

impl From<f64> for TreeValue {
    fn from(f: f64) -> Self {
        TreeValue::Number(f)
    }
}

impl From<&str> for TreeValue {
    fn from(s: &str) -> Self {
        TreeValue::String(s.to_owned())
    }
}

impl From<String> for TreeValue {
    fn from(s: String) -> Self {
        TreeValue::String(s)
    }
}

impl From<Vec<TreeValue>> for TreeValue {
    fn from(items: Vec<TreeValue>) -> Self {
        TreeValue::Array(items)
    }
}

impl From<Object> for TreeValue {
    fn from(map: Object) -> Self {
        TreeValue::Object(map)
    }
}

/// Non-finite numbers have no JSON representation and become `null`.
impl From<TreeValue> for serde_json::Value {
    fn from(value: TreeValue) -> Self {
        use serde_json::Value;
        match value {
            TreeValue::Null => Value::Null,
            TreeValue::Boolean(b) => Value::Bool(b),
            TreeValue::Integer(n) => Value::Number(n.into()),
            TreeValue::Number(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            TreeValue::String(s) => Value::String(s),
            TreeValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            TreeValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect(),
            ),
        }
    }
}
