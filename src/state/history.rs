//! Undo/redo history stacks.
//!
//! Full-snapshot history: every mutation records the pre-mutation state
//! on the undo stack and empties the redo stack. The undo side can be
//! depth-capped, in which case it behaves as a ring that evicts its
//! oldest entry instead of growing.

use crate::model::Snapshot;
use std::collections::VecDeque;

/// Undo and redo stacks of complete heap snapshots.
///
/// Replaying the undo stack bottom to top followed by the current state
/// reconstructs the full edit history; [`record`](Self::record) always
/// empties the redo stack.
#[derive(Debug, Default)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    depth: Option<usize>,
}

impl History {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `depth` undo snapshots; `None` means
    /// unbounded, `Some(0)` disables undo entirely.
    pub fn with_depth(depth: Option<usize>) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            depth,
        }
    }

    /// True if there is a state to undo to.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// True if there is an undone state to reapply.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Record `snapshot` as the newest undoable state. A fresh mutation
    /// invalidates any undone future, so the redo stack is emptied.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.redo.clear();
        self.push_undo(snapshot);
    }

    /// Step back: trade `current` for the most recent undo snapshot.
    /// Returns `None`, keeping `current` off the redo stack, when there
    /// is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward: trade `current` for the most recently undone
    /// snapshot. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.push_undo(current);
        Some(next)
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        match self.depth {
            Some(0) => {}
            Some(depth) => {
                while self.undo.len() >= depth {
                    self.undo.pop_front();
                }
                self.undo.push_back(snapshot);
            }
            None => self.undo.push_back(snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn snapshot(values: &[f64]) -> Snapshot {
        Snapshot::capture(values, &BTreeSet::new(), None)
    }

    #[test]
    fn starts_with_nothing_to_undo_or_redo() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_then_undo_returns_the_recorded_state() {
        let mut history = History::new();
        history.record(snapshot(&[1.0]));

        let previous = history.undo(snapshot(&[1.0, 2.0])).expect("undoable");
        assert_eq!(previous.values(), &[1.0]);
        assert!(history.can_redo());
    }

    #[test]
    fn undo_on_empty_stack_keeps_current_off_the_redo_stack() {
        let mut history = History::new();
        assert!(history.undo(snapshot(&[1.0])).is_none());
        assert!(!history.can_redo());
    }

    #[test]
    fn redo_returns_what_undo_parked() {
        let mut history = History::new();
        history.record(snapshot(&[1.0]));

        let previous = history.undo(snapshot(&[1.0, 2.0])).expect("undoable");
        let next = history.redo(previous).expect("redoable");
        assert_eq!(next.values(), &[1.0, 2.0]);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_clears_the_redo_stack() {
        let mut history = History::new();
        history.record(snapshot(&[1.0]));
        history.undo(snapshot(&[1.0, 2.0])).expect("undoable");
        assert!(history.can_redo());

        history.record(snapshot(&[1.0, 3.0]));
        assert!(!history.can_redo());
    }

    #[test]
    fn depth_cap_evicts_the_oldest_snapshot() {
        let mut history = History::with_depth(Some(2));
        history.record(snapshot(&[1.0]));
        history.record(snapshot(&[2.0]));
        history.record(snapshot(&[3.0]));

        let newest = history.undo(snapshot(&[])).expect("undoable");
        assert_eq!(newest.values(), &[3.0]);
        let older = history.undo(snapshot(&[])).expect("undoable");
        assert_eq!(older.values(), &[2.0]);
        assert!(!history.can_undo());
    }

    #[test]
    fn zero_depth_disables_undo() {
        let mut history = History::with_depth(Some(0));
        history.record(snapshot(&[1.0]));
        assert!(!history.can_undo());
    }

    #[test]
    fn clear_drops_both_stacks() {
        let mut history = History::new();
        history.record(snapshot(&[1.0]));
        history.undo(snapshot(&[2.0])).expect("undoable");
        history.record(snapshot(&[3.0]));

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
