//! Structural kinds of tree values and which kinds may be merged.

use crate::types::TreeValue;
use std::fmt;

/// The structural kind of a [`TreeValue`], named after the JSON Schema type
/// a schema generator would infer for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
    Null,
}

impl Kind {
    /// The JSON Schema type name (`"object"`, `"integer"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
        }
    }

    /// Everything except arrays and objects.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Kind::Array | Kind::Object)
    }

    /// Two kinds merge iff they are identical or form the integer/number
    /// pair. A schema cannot describe a single field that is "either an
    /// array or an object", so every other combination is rejected.
    pub fn is_compatible_with(self, other: Kind) -> bool {
        self == other
            || matches!(
                (self, other),
                (Kind::Integer, Kind::Number) | (Kind::Number, Kind::Integer)
            )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TreeValue {
    /// Report the structural kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            TreeValue::Null => Kind::Null,
            TreeValue::Boolean(_) => Kind::Boolean,
            TreeValue::Integer(_) => Kind::Integer,
            TreeValue::Number(_) => Kind::Number,
            TreeValue::String(_) => Kind::String,
            TreeValue::Array(_) => Kind::Array,
            TreeValue::Object(_) => Kind::Object,
        }
    }
}
