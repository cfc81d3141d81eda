//! Visualization and history wrapper around the heap core.
//!
//! [`VisualHeap`] keeps the core's max-heap semantics intact and layers
//! the observable bits on top: which indices the last mutation swapped,
//! a snapshot-based undo/redo history, and the narrated k-th-largest
//! query. A renderer calls [`current_state`](VisualHeap::current_state)
//! after every mutating call and draws from the returned copy.

use crate::config::EngineConfig;
use crate::heap::MaxHeap;
use crate::model::{EngineError, HeapView, Snapshot};
use crate::state::history::History;
use crate::state::query::{NthLargestSteps, QueryStep};
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace};

/// Narration sink for the step-by-step query.
pub type StepCallback = Box<dyn FnMut(&str)>;

/// Max-heap with impacted-index tracking, undo/redo, and step narration.
///
/// Exactly one logical owner drives a given instance: none of the
/// operations here are safe to interleave across callers (undo and redo
/// manipulate shared stack state, and every insert empties the redo
/// stack as a visible side effect). Callers that must share one heap
/// need their own mutual exclusion around the whole surface.
pub struct VisualHeap {
    heap: MaxHeap,
    impacted: BTreeSet<usize>,
    new_value: Option<f64>,
    history: History,
    on_step: Option<StepCallback>,
    step_delay: Duration,
}

impl fmt::Debug for VisualHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualHeap")
            .field("heap", &self.heap)
            .field("impacted", &self.impacted)
            .field("new_value", &self.new_value)
            .field("history", &self.history)
            .field("step_delay", &self.step_delay)
            .finish_non_exhaustive()
    }
}

impl Default for VisualHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualHeap {
    /// Empty heap with default configuration.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Empty heap configured with `config`.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            heap: MaxHeap::new(),
            impacted: BTreeSet::new(),
            new_value: None,
            history: History::with_depth(config.history_depth),
            on_step: None,
            step_delay: config.step_delay,
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True if there is a state to undo to.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if there is an undone state to reapply.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Register (or, with `None`, clear) the narration sink used by
    /// [`find_nth_largest`](Self::find_nth_largest). Without a sink the
    /// narration is silently dropped.
    pub fn set_step_callback(&mut self, callback: Option<StepCallback>) {
        self.on_step = callback;
    }

    /// Owned copy of the observable state. The view is fully detached;
    /// renderers can hold or mutate it without affecting the engine.
    pub fn current_state(&self) -> HeapView {
        HeapView {
            values: self.heap.values().to_vec(),
            impacted_nodes: self.impacted.clone(),
            new_value: self.new_value,
        }
    }

    /// Insert `value`, recording both indices of every swap the upward
    /// repair pass makes into the impacted set.
    ///
    /// The pre-insert state goes onto the undo stack and the redo stack
    /// is emptied before the heap changes.
    pub fn insert(&mut self, value: f64) {
        let snapshot = self.capture();
        self.history.record(snapshot);
        self.impacted.clear();
        self.new_value = Some(value);

        let impacted = &mut self.impacted;
        self.heap.insert_with(value, |child, parent| {
            impacted.insert(child);
            impacted.insert(parent);
        });
        debug!(value, len = self.heap.len(), "insert");
    }

    /// Remove and return the maximum, tracking the downward repair pass
    /// the way [`insert`](Self::insert) tracks the upward one.
    ///
    /// Returns `None` on an empty heap without recording a history
    /// entry; nothing changed, so there is nothing to undo.
    pub fn extract_max(&mut self) -> Option<f64> {
        if self.heap.is_empty() {
            return None;
        }
        let snapshot = self.capture();
        self.history.record(snapshot);
        self.impacted.clear();
        self.new_value = None;

        let impacted = &mut self.impacted;
        let max = self.heap.extract_max_with(|node, child| {
            impacted.insert(node);
            impacted.insert(child);
        });
        debug!(max = ?max, len = self.heap.len(), "extract_max");
        max
    }

    /// Restore the state preceding the last mutation, parking the
    /// current one for [`redo`](Self::redo). No-op when there is nothing
    /// to undo.
    pub fn undo(&mut self) {
        if !self.history.can_undo() {
            return;
        }
        let current = self.capture();
        if let Some(previous) = self.history.undo(current) {
            self.apply(previous);
            trace!(len = self.heap.len(), "undo");
        }
    }

    /// Reapply the most recently undone state. No-op when there is
    /// nothing to redo.
    pub fn redo(&mut self) {
        if !self.history.can_redo() {
            return;
        }
        let current = self.capture();
        if let Some(next) = self.history.redo(current) {
            self.apply(next);
            trace!(len = self.heap.len(), "redo");
        }
    }

    /// Discard the heap and all history, returning to the empty state.
    pub fn reset(&mut self) {
        self.heap = MaxHeap::new();
        self.impacted.clear();
        self.new_value = None;
        self.history.clear();
        debug!("reset");
    }

    /// Lazy step sequence resolving the n-th largest element.
    ///
    /// Runs against a scratch copy: this heap, its impacted set and its
    /// history stay untouched no matter how far the caller drives the
    /// iterator; dropping it early is cancellation.
    pub fn nth_largest_steps(&self, n: usize) -> Result<NthLargestSteps, EngineError> {
        if n < 1 || n > self.heap.len() {
            return Err(EngineError::InvalidRange {
                n,
                size: self.heap.len(),
            });
        }
        Ok(NthLargestSteps::new(self.heap.clone(), n))
    }

    /// Resolve the n-th largest element, narrating each extraction to
    /// the registered step callback and pausing for the configured delay
    /// between intermediate steps.
    ///
    /// The delay is UI pacing, not correctness; configure a zero
    /// [`step_delay`](EngineConfig::step_delay) to run flat out. The
    /// wrapper's persistent state is read-only for the whole query.
    pub fn find_nth_largest(&mut self, n: usize) -> Result<f64, EngineError> {
        let mut steps = self.nth_largest_steps(n)?;
        debug!(n, "find_nth_largest");

        for step in steps.by_ref() {
            trace!(%step, "query step");
            if let Some(on_step) = self.on_step.as_mut() {
                on_step(&step.to_string());
            }
            if matches!(step, QueryStep::Extracted { .. }) && !self.step_delay.is_zero() {
                std::thread::sleep(self.step_delay);
            }
        }

        steps.result().ok_or(EngineError::InvalidRange {
            n,
            size: self.heap.len(),
        })
    }

    fn capture(&self) -> Snapshot {
        Snapshot::capture(self.heap.values(), &self.impacted, self.new_value)
    }

    fn apply(&mut self, snapshot: Snapshot) {
        let (values, impacted, new_value) = snapshot.into_parts();
        self.heap.restore(&values);
        self.impacted = impacted;
        self.new_value = new_value;
    }
}

#[cfg(test)]
#[path = "visual_heap_tests.rs"]
mod visual_heap_tests;
