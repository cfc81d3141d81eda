//! Error types for the heap engine.
//!
//! The engine has exactly one domain error: a k-th-largest query asked
//! for a rank that does not exist. Every other operation is total;
//! absence is modeled with `Option` (extracting from an empty heap,
//! undoing with an empty stack), never as an error. Ambient modules
//! ([`crate::config`], [`crate::logging`]) define their own error types
//! next to their code.

use thiserror::Error;

/// Errors raised by heap engine queries.
///
/// Mutating operations never fail: inserts always succeed, and
/// extraction from an empty heap returns `None`. The only failure mode
/// is requesting an order statistic outside the heap.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The requested rank is outside `[1, size]`.
    ///
    /// A k-th-largest query can only answer for ranks between 1 (the
    /// maximum) and the current element count (the minimum). The query
    /// does not execute and the heap is left untouched.
    #[error("rank {n} is out of range for a heap of {size} element(s)")]
    InvalidRange {
        /// The rank that was requested.
        n: usize,
        /// Heap size at the time of the call.
        size: usize,
    },
}
