//! Undo/redo snapshots.
//!
//! A snapshot is a full, immutable capture of heap contents plus the
//! visualization metadata that belongs to it. Restoring one replaces
//! live state verbatim; history never replays operations.

use std::collections::BTreeSet;
use std::sync::Arc;

/// Immutable capture of heap state at one point in its edit history.
///
/// The values buffer sits behind an `Arc`, so cloning a snapshot shares
/// the allocation instead of copying it. History then costs one buffer
/// per mutation, not one per stack move.
#[derive(Debug, Clone)]
pub struct Snapshot {
    values: Arc<[f64]>,
    impacted: BTreeSet<usize>,
    new_value: Option<f64>,
}

impl Snapshot {
    /// Capture the given live state.
    pub fn capture(values: &[f64], impacted: &BTreeSet<usize>, new_value: Option<f64>) -> Self {
        Self {
            values: values.into(),
            impacted: impacted.clone(),
            new_value,
        }
    }

    /// Heap contents in array order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Indices swapped by the mutation that produced this state.
    pub fn impacted(&self) -> &BTreeSet<usize> {
        &self.impacted
    }

    /// Value inserted by the mutation that produced this state, if the
    /// mutation was an insert.
    pub fn new_value(&self) -> Option<f64> {
        self.new_value
    }

    /// Decompose into owned parts for restoration.
    pub(crate) fn into_parts(self) -> (Arc<[f64]>, BTreeSet<usize>, Option<f64>) {
        (self.values, self.impacted, self.new_value)
    }
}
