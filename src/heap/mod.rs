//! Array-backed max-heap core.
//!
//! Maintains the max-heap invariant over a dense `Vec<f64>`: for every
//! index `i > 0`, `values[parent(i)] >= values[i]`. Pure data-structure
//! logic; the visualization wrapper in [`crate::state`] layers impacted
//! tracking and history on top without this type knowing about either.

pub mod ops;

use crate::model::EngineError;

/// Array-backed binary max-heap over plain numbers.
///
/// Stored as a complete binary tree in a dense 0-indexed vector:
/// `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`, `right(i) = 2i + 2`.
/// Values are `f64` and are compared with IEEE `>`; NaN payloads are the
/// caller's problem, no sanitization happens here.
#[derive(Debug, Clone, Default)]
pub struct MaxHeap {
    values: Vec<f64>,
}

impl MaxHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Heap contents in array order (not sorted order).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Insert `value`, restoring the heap property by sifting up.
    /// Always succeeds.
    pub fn insert(&mut self, value: f64) {
        self.insert_with(value, |_, _| {});
    }

    /// Insert `value`, reporting every swap of the repair pass to
    /// `on_swap` (both indices of each exchange, child first).
    pub fn insert_with(&mut self, value: f64, on_swap: impl FnMut(usize, usize)) {
        self.values.push(value);
        let last = self.values.len() - 1;
        ops::sift_up(&mut self.values, last, on_swap);
    }

    /// Remove and return the maximum, or `None` if the heap is empty.
    pub fn extract_max(&mut self) -> Option<f64> {
        self.extract_max_with(|_, _| {})
    }

    /// Remove and return the maximum, reporting repair swaps to `on_swap`.
    ///
    /// The last element replaces the root and sinks until no child
    /// exceeds it, taking the larger child at each step and the left one
    /// on ties.
    pub fn extract_max_with(&mut self, on_swap: impl FnMut(usize, usize)) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let max = self.values.swap_remove(0);
        if !self.values.is_empty() {
            ops::sift_down(&mut self.values, 0, on_swap);
        }
        Some(max)
    }

    /// Value with rank `n`, where rank 1 is the maximum and rank `len`
    /// the minimum.
    ///
    /// Runs against a private clone so this heap is never mutated:
    /// extract the maximum `n` times and return the last one. O(n log n)
    /// rather than the optimal selection, but simple enough to narrate
    /// step by step, which is the point.
    pub fn find_nth_largest(&self, n: usize) -> Result<f64, EngineError> {
        if n < 1 || n > self.len() {
            return Err(EngineError::InvalidRange { n, size: self.len() });
        }
        let mut scratch = self.clone();
        for _ in 0..n - 1 {
            scratch.extract_max();
        }
        scratch
            .extract_max()
            .ok_or(EngineError::InvalidRange { n, size: self.len() })
    }

    /// Replace the contents wholesale. Used by snapshot restoration; the
    /// slice is trusted to already satisfy the heap property.
    pub(crate) fn restore(&mut self, values: &[f64]) {
        self.values.clear();
        self.values.extend_from_slice(values);
    }
}
