//! WASM bindings for treemerge-core.
//!
//! Exposes `merge_json` and `merge_yaml` as `#[wasm_bindgen]` functions that
//! can be called from JavaScript/TypeScript.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p treemerge-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/treemerge_wasm.wasm
//! ```

use treemerge_core::{decode_yaml_stream, merge_all, MergeError, TreeValue};
use wasm_bindgen::prelude::*;

/// Merge a JSON array of documents, in order, into one compact JSON document.
///
/// Throws a JS error if the input is not a JSON array or the documents
/// cannot be merged.
#[wasm_bindgen]
pub fn merge_json(documents: &str) -> std::result::Result<String, JsValue> {
    merge_json_documents(documents).map_err(to_js_error)
}

/// Merge every document of a `---`-separated YAML stream into one YAML
/// document.
#[wasm_bindgen]
pub fn merge_yaml(stream: &str) -> std::result::Result<String, JsValue> {
    decode_yaml_stream(stream)
        .and_then(merge_all)
        .and_then(|merged| merged.to_yaml_string())
        .map_err(to_js_error)
}

fn merge_json_documents(documents: &str) -> treemerge_core::error::Result<String> {
    let docs: Vec<serde_json::Value> = serde_json::from_str(documents)?;
    let docs = docs
        .into_iter()
        .map(TreeValue::try_from)
        .collect::<treemerge_core::error::Result<Vec<_>>>()?;
    merge_all(docs)?.to_json_string(false)
}

fn to_js_error(e: MergeError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
