//! # treemerge-core
//!
//! Type-aware structural merging of YAML/JSON documents.
//!
//! Given an ordered sequence of decoded documents, treemerge folds them into
//! a single tree that a JSON Schema generator can consume: scalars from later
//! documents override earlier ones, arrays are merged constructively, objects
//! are deep-merged, and combinations a schema could not describe (an array in
//! one file and an object in the next) are rejected.
//!
//! ## Quick start
//!
//! ```rust
//! use treemerge_core::{decode_yaml, merge_all};
//!
//! let first = decode_yaml(r#"{"foo": "aaa", "bar": [41], "baz": [41]}"#).unwrap();
//! let second = decode_yaml(r#"{"foo": "bbb", "baz": [42]}"#).unwrap();
//!
//! let merged = merge_all([first, second]).unwrap();
//! assert_eq!(
//!     merged.to_json_string(false).unwrap(),
//!     r#"{"bar":[41],"baz":[42,41],"foo":"bbb"}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`merge`] — pairwise merge and left fold over documents
//! - [`classify`] — structural kinds and kind compatibility
//! - [`keys`] — string-key normalization of decoded maps
//! - [`decode`] — YAML/JSON text → `TreeValue`
//! - [`types`] — the `TreeValue` tree and its serializer
//! - [`path`] — key chains reported with merge conflicts
//! - [`error`] — Error types

pub mod classify;
pub mod decode;
pub mod error;
pub mod keys;
pub mod merge;
pub mod path;
pub mod types;

pub use classify::Kind;
pub use decode::{decode_json, decode_yaml, decode_yaml_stream, merge_yaml_documents};
pub use error::MergeError;
pub use keys::{normalize_keys, MapKey};
pub use merge::{merge, merge_all};
pub use path::KeyPath;
pub use types::{Object, TreeValue};
