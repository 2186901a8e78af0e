//! Key normalization: turning decoded map entries into string-keyed objects.
//!
//! JSON decoders hand out maps whose keys are strings by construction. YAML
//! decoders hand out maps keyed by arbitrary scalars (`42: x`, `true: y`,
//! even `[1, 2]: z`). Objects in a [`TreeValue`] tree only ever have string
//! keys, so every other key is rejected rather than coerced.

use crate::error::{MergeError, Result};
use crate::types::{Object, TreeValue};
use serde_yaml::Value as YamlValue;

/// A decoded map key that may or may not be a string.
pub trait MapKey {
    /// Convert into a string key, failing with [`MergeError::NonStringKey`]
    /// if the key is not natively a string.
    fn into_key(self) -> Result<String>;
}

impl MapKey for String {
    fn into_key(self) -> Result<String> {
        Ok(self)
    }
}

impl MapKey for YamlValue {
    fn into_key(self) -> Result<String> {
        match self {
            YamlValue::String(s) => Ok(s),
            other => Err(MergeError::NonStringKey {
                key: describe_key(&other),
            }),
        }
    }
}

/// Textual form of a rejected key, for error messages.
fn describe_key(key: &YamlValue) -> String {
    match key {
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::String(s) => s.clone(),
        YamlValue::Sequence(_) => "<sequence>".to_string(),
        YamlValue::Mapping(_) => "<mapping>".to_string(),
        YamlValue::Tagged(tagged) => format!("{} <tagged>", tagged.tag),
    }
}

/// Build an [`Object`] from decoded map entries.
///
/// Values are carried over unchanged. The first non-string key aborts the
/// conversion and no partial object is returned.
///
/// # Examples
///
/// ```
/// use treemerge_core::{normalize_keys, TreeValue};
///
/// let object = normalize_keys(vec![("name".to_string(), TreeValue::from("Alice"))]).unwrap();
/// assert_eq!(object.get("name"), Some(&TreeValue::from("Alice")));
/// ```
pub fn normalize_keys<K, I>(entries: I) -> Result<Object>
where
    K: MapKey,
    I: IntoIterator<Item = (K, TreeValue)>,
{
    entries
        .into_iter()
        .map(|(key, value)| Ok((key.into_key()?, value)))
        .collect()
}
