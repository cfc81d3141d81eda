//! Renderer-facing state view.

use serde::Serialize;
use std::collections::BTreeSet;

/// Owned copy of the engine's observable state.
///
/// Everything here is detached from the engine: holding or mutating a
/// `HeapView` cannot corrupt the heap it came from. Serializes with
/// camelCase field names (`values`, `impactedNodes`, `newValue`) so a
/// JavaScript host can consume it directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapView {
    /// Heap contents in array order (not sorted order).
    pub values: Vec<f64>,
    /// Indices that participated in a swap during the last mutation.
    pub impacted_nodes: BTreeSet<usize>,
    /// The most recently inserted value, if the last mutation was an
    /// insert.
    pub new_value: Option<f64>,
}
