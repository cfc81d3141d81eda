//! Step-narrated k-th-largest query.
//!
//! The query runs against a scratch heap and reports progress as a lazy,
//! finite sequence of [`QueryStep`] events. Each `next()` call performs
//! exactly one extraction (or emits the closing summary), so a caller
//! driving an animated UI can interleave rendering with the algorithm at
//! whatever pace it likes. Dropping the iterator mid-sequence abandons
//! the scratch heap; the wrapper it came from was never touched.

use crate::heap::MaxHeap;
use serde::Serialize;
use std::fmt;

/// One observable step of a k-th-largest query.
///
/// `Display` renders the human-readable narration line for the step;
/// hosts that prefer structured progress can consume the variants (or
/// their serialized form) directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum QueryStep {
    /// An intermediate maximum was removed and discarded.
    Extracted {
        /// 1-based rank of the removed value (1 is the overall maximum).
        rank: usize,
        /// The value removed from the scratch heap.
        value: f64,
    },
    /// The requested order statistic was reached.
    Found {
        /// The requested rank.
        rank: usize,
        /// The answer.
        value: f64,
    },
    /// The query finished.
    Completed {
        /// Total number of extract operations performed.
        operations: usize,
    },
}

impl fmt::Display for QueryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extracted { rank, value } => {
                write!(f, "Removing {} largest element: {value}", ordinal(*rank))
            }
            Self::Found { rank, value } => {
                write!(f, "Found {} largest element: {value}", ordinal(*rank))
            }
            Self::Completed { operations } => write!(f, "Completed in {operations} operations"),
        }
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, ... with 11th–13th kept on "th".
fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Lazy sequence of steps resolving the n-th largest element.
///
/// Finite and not restartable: after [`QueryStep::Completed`] the
/// iterator is exhausted. Built by
/// [`VisualHeap::nth_largest_steps`](crate::state::VisualHeap::nth_largest_steps),
/// which validates the rank up front.
#[derive(Debug)]
pub struct NthLargestSteps {
    scratch: MaxHeap,
    target: usize,
    next_rank: usize,
    result: Option<f64>,
    finished: bool,
}

impl NthLargestSteps {
    pub(crate) fn new(scratch: MaxHeap, target: usize) -> Self {
        Self {
            scratch,
            target,
            next_rank: 1,
            result: None,
            finished: false,
        }
    }

    /// The answer, available once the [`QueryStep::Found`] step has been
    /// yielded.
    pub fn result(&self) -> Option<f64> {
        self.result
    }
}

impl Iterator for NthLargestSteps {
    type Item = QueryStep;

    fn next(&mut self) -> Option<QueryStep> {
        if self.finished {
            return None;
        }
        if self.next_rank > self.target {
            self.finished = true;
            return Some(QueryStep::Completed {
                operations: self.target,
            });
        }
        let rank = self.next_rank;
        self.next_rank += 1;
        let value = self.scratch.extract_max()?;
        if rank == self.target {
            self.result = Some(value);
            Some(QueryStep::Found { rank, value })
        } else {
            Some(QueryStep::Extracted { rank, value })
        }
    }
}
