//! Error types for decoding and merging document trees.

use crate::classify::Kind;
use crate::path::KeyPath;
use thiserror::Error;

/// Errors that can occur while decoding or merging document trees.
///
/// Every variant is fatal for the fold that produced it: merging is a pure
/// function of its inputs, so the same documents always fail the same way.
#[derive(Error, Debug)]
pub enum MergeError {
    /// A fold was requested over zero documents.
    #[error("expected at least one document")]
    EmptyInput,

    /// A mapping key was not a string (e.g. the YAML `42: value`).
    #[error("encountered mapping key that is not a string: {key}")]
    NonStringKey { key: String },

    /// Two values at the same position cannot be combined.
    #[error(
        "cannot merge {left} with {right} at {path} (a schema could not accept both inputs)"
    )]
    IncompatibleKinds {
        left: Kind,
        right: Kind,
        path: KeyPath,
    },

    /// A decoded value has no tree-value shape.
    #[error("unrecognized value kind: {0}")]
    UnrecognizedValueKind(String),

    /// The input text was not valid YAML.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The input text was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout treemerge-core.
pub type Result<T> = std::result::Result<T, MergeError>;
