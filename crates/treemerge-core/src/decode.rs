//! Decoding YAML and JSON text into [`TreeValue`] trees.
//!
//! This is the boundary between raw decoder output and the merge engine.
//! Maps are normalized bottom-up through [`normalize_keys`], so a tree that
//! leaves this module only contains string-keyed objects. Decoded values
//! with no tree-value shape (integers beyond `i64`, YAML values carrying a
//! custom tag) are rejected with [`MergeError::UnrecognizedValueKind`].

use crate::error::{MergeError, Result};
use crate::keys::normalize_keys;
use crate::merge::merge_all;
use crate::types::TreeValue;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Decode a strict JSON document.
pub fn decode_json(text: &str) -> Result<TreeValue> {
    let value: JsonValue = serde_json::from_str(text)?;
    TreeValue::try_from(value)
}

/// Decode a single YAML document. JSON text is accepted as well.
///
/// YAML merge keys (`<<: *anchor`) are expanded before conversion.
///
/// # Examples
///
/// ```
/// use treemerge_core::{decode_yaml, TreeValue};
///
/// let value = decode_yaml("numbers: [1, 2.5]").unwrap();
/// let numbers = value.get("numbers").unwrap().as_array().unwrap();
/// assert_eq!(numbers, &[TreeValue::Integer(1), TreeValue::Number(2.5)]);
/// ```
pub fn decode_yaml(text: &str) -> Result<TreeValue> {
    let value: YamlValue = serde_yaml::from_str(text)?;
    from_yaml(value)
}

/// Decode every document of a `---`-separated YAML stream, in order.
pub fn decode_yaml_stream(text: &str) -> Result<Vec<TreeValue>> {
    serde_yaml::Deserializer::from_str(text)
        .map(|document| from_yaml(YamlValue::deserialize(document)?))
        .collect()
}

/// Decode each source as a YAML stream and fold all documents, in order,
/// into one tree.
///
/// # Errors
///
/// Returns the first decoding or merge error, or
/// [`MergeError::EmptyInput`] when the sources hold no documents at all.
pub fn merge_yaml_documents<S: AsRef<str>>(sources: &[S]) -> Result<TreeValue> {
    let mut docs = Vec::new();
    for source in sources {
        docs.extend(decode_yaml_stream(source.as_ref())?);
    }
    merge_all(docs)
}

fn from_yaml(mut value: YamlValue) -> Result<TreeValue> {
    value.apply_merge()?;
    TreeValue::try_from(value)
}

impl TryFrom<JsonValue> for TreeValue {
    type Error = MergeError;

    fn try_from(value: JsonValue) -> Result<Self> {
        Ok(match value {
            JsonValue::Null => TreeValue::Null,
            JsonValue::Bool(b) => TreeValue::Boolean(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    TreeValue::Integer(i)
                } else if n.is_u64() {
                    return Err(out_of_range(&n));
                } else {
                    TreeValue::Number(n.as_f64().ok_or_else(|| out_of_range(&n))?)
                }
            }
            JsonValue::String(s) => TreeValue::String(s),
            JsonValue::Array(items) => TreeValue::Array(
                items
                    .into_iter()
                    .map(TreeValue::try_from)
                    .collect::<Result<_>>()?,
            ),
            JsonValue::Object(map) => TreeValue::Object(normalize_keys(
                map.into_iter()
                    .map(|(key, child)| Ok((key, TreeValue::try_from(child)?)))
                    .collect::<Result<Vec<_>>>()?,
            )?),
        })
    }
}

impl TryFrom<YamlValue> for TreeValue {
    type Error = MergeError;

    fn try_from(value: YamlValue) -> Result<Self> {
        Ok(match value {
            YamlValue::Null => TreeValue::Null,
            YamlValue::Bool(b) => TreeValue::Boolean(b),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    TreeValue::Integer(i)
                } else if n.is_u64() {
                    return Err(out_of_range(&n));
                } else {
                    TreeValue::Number(n.as_f64().ok_or_else(|| out_of_range(&n))?)
                }
            }
            YamlValue::String(s) => TreeValue::String(s),
            YamlValue::Sequence(items) => TreeValue::Array(
                items
                    .into_iter()
                    .map(TreeValue::try_from)
                    .collect::<Result<_>>()?,
            ),
            YamlValue::Mapping(map) => TreeValue::Object(normalize_keys(
                map.into_iter()
                    .map(|(key, child)| Ok((key, TreeValue::try_from(child)?)))
                    .collect::<Result<Vec<_>>>()?,
            )?),
            YamlValue::Tagged(tagged) => {
                return Err(MergeError::UnrecognizedValueKind(format!(
                    "value tagged {}",
                    tagged.tag
                )))
            }
        })
    }
}

fn out_of_range(n: impl std::fmt::Display) -> MergeError {
    MergeError::UnrecognizedValueKind(format!("number {n} is outside the integer range"))
}
