//! heapviz
//!
//! Step-by-step visualization engine for binary max-heap algorithms.
//!
//! Two layers, one depending on the other: [`heap`] owns the array-backed
//! max-heap itself, and [`state`] wraps it with the observability a
//! renderer needs: which indices the last mutation touched, a
//! snapshot-based undo/redo history, and a step-narrated k-th-largest
//! query. Presentation (layout, drawing, styling) lives in the consumer;
//! this crate only hands out detached views of heap state.

pub mod config;
pub mod heap;
pub mod logging;
pub mod model;
pub mod state;

pub use heap::MaxHeap;
pub use model::{EngineError, HeapView};
pub use state::{QueryStep, VisualHeap};
