//! Selection state and output synchronization
//!
//! - `engine` - Tri-state checked/unchecked/indeterminate tracking
//! - `sync` - Ordered output list, deltas and backing-list reordering
//! - `record` - Output records

mod engine;
mod record;
mod sync;

pub use engine::SelectionEngine;
pub use record::{SelectionDelta, SelectionRecord};
pub use sync::{order_items, reorder_backing, OutputSynchronizer};
