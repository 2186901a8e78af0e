//! Type-aware structural merging of document trees.
//!
//! Two values merge only when their kinds are compatible (see
//! [`Kind::is_compatible_with`]). Given compatible kinds:
//!
//! - **Scalars**: the second value wins, except that a `Number` always wins
//!   over an `Integer` so the merged tree never narrows a fractional field.
//! - **Arrays**: constructive. All elements of the second array, followed by
//!   every element of the first array that is not already present.
//! - **Objects**: deep union. Shared keys merge recursively; keys present on
//!   only one side are carried through.
//!
//! A conflict anywhere in the tree aborts the whole merge.

use crate::classify::Kind;
use crate::error::{MergeError, Result};
use crate::path::KeyPath;
use crate::types::{Object, TreeValue};
use log::{debug, trace};

/// Merge two values into one.
///
/// The second argument is the later document: its scalars override the
/// first's, and its array elements are listed first.
///
/// # Errors
///
/// Returns [`MergeError::IncompatibleKinds`] if the two values, or any pair
/// of values under a shared key, have kinds that cannot be merged.
///
/// # Examples
///
/// ```
/// use treemerge_core::{merge, TreeValue};
///
/// let merged = merge(TreeValue::from(42.4), TreeValue::from(44)).unwrap();
/// assert_eq!(merged, TreeValue::from(42.4));
/// ```
pub fn merge(a: TreeValue, b: TreeValue) -> Result<TreeValue> {
    merge_at(a, b, &mut KeyPath::root())
}

/// Fold a sequence of documents left to right with [`merge`].
///
/// A single document is returned untouched. The accumulated result is always
/// the first operand, so later documents override earlier scalars.
///
/// # Errors
///
/// Returns [`MergeError::EmptyInput`] for an empty sequence, or the first
/// merge error encountered.
///
/// # Examples
///
/// ```
/// use treemerge_core::{merge_all, TreeValue};
///
/// let docs = vec![TreeValue::from("foo"), TreeValue::from("bar")];
/// assert_eq!(merge_all(docs).unwrap(), TreeValue::from("bar"));
/// ```
pub fn merge_all<I>(docs: I) -> Result<TreeValue>
where
    I: IntoIterator<Item = TreeValue>,
{
    let mut docs = docs.into_iter();
    let mut result = docs.next().ok_or(MergeError::EmptyInput)?;
    for (offset, doc) in docs.enumerate() {
        // `offset` counts from the second document.
        debug!("merging document #{} ({})", offset + 2, doc.kind());
        result = merge(result, doc)?;
    }
    Ok(result)
}

fn merge_at(a: TreeValue, b: TreeValue, path: &mut KeyPath) -> Result<TreeValue> {
    let (left, right) = (a.kind(), b.kind());
    if !left.is_compatible_with(right) {
        debug!("rejecting {left} and {right} at {path}");
        return Err(MergeError::IncompatibleKinds {
            left,
            right,
            path: path.clone(),
        });
    }

    match (a, b) {
        (TreeValue::Array(a), TreeValue::Array(b)) => Ok(TreeValue::Array(merge_arrays(a, b))),
        (TreeValue::Object(a), TreeValue::Object(b)) => {
            Ok(TreeValue::Object(merge_objects(a, b, path)?))
        }
        (a, b) => Ok(merge_scalars(a, b)),
    }
}

/// Both operands are scalars of compatible kinds.
fn merge_scalars(a: TreeValue, b: TreeValue) -> TreeValue {
    match (a.kind(), b.kind()) {
        (Kind::Number, Kind::Integer) => a,
        _ => b,
    }
}

fn merge_arrays(a: Vec<TreeValue>, b: Vec<TreeValue>) -> Vec<TreeValue> {
    let (len_a, len_b) = (a.len(), b.len());
    let mut out = Vec::with_capacity(len_a + len_b);
    out.extend(b);
    for item in a {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    trace!(
        "array merge kept {} of {} earlier elements",
        out.len() - len_b,
        len_a
    );
    out
}

fn merge_objects(mut a: Object, b: Object, path: &mut KeyPath) -> Result<Object> {
    for (key, theirs) in b {
        let merged = match a.remove(&key) {
            Some(ours) => {
                path.push(&key);
                let merged = merge_at(ours, theirs, path);
                path.pop();
                merged?
            }
            None => theirs,
        };
        a.insert(key, merged);
    }
    Ok(a)
}
