//! treeselect - hierarchical multi-select over a flat option list
//!
//! Options carry a delimited section path. treeselect folds them into a tree
//! of sections and leaves, tracks tri-state selection (checked, unchecked,
//! indeterminate) and keeps an ordered output list in sync with every change.
//!
//! ```
//! use treeselect::{OptionRecord, TreeMultiselect};
//!
//! let mut widget = TreeMultiselect::builder(vec![
//!     OptionRecord::new("a", ["Fruit", "Red"], 0),
//!     OptionRecord::new("b", ["Fruit", "Green"], 1),
//! ])
//! .build()?;
//!
//! widget.set_section(&["Fruit"], true)?;
//! assert_eq!(widget.selected_values(), vec!["a", "b"]);
//! # Ok::<(), treeselect::TreeSelectError>(())
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod ports;
pub mod selection;
pub mod tree;
pub mod ui;
pub mod widget;

// Re-exports for convenience
pub use config::{Config, Options};
pub use error::{NotFoundTarget, TreeSelectError, TreeSelectResult};
pub use parser::{load_document, split_section_path, OptionsDocument};
pub use ports::{BackingList, FormValueList, JsonChangeSink, NoopChangeSink, SelectionChangeSink};
pub use selection::{OutputSynchronizer, SelectionDelta, SelectionEngine, SelectionRecord};
pub use tree::{build_tree, OptionRecord, PathTree, SectionState, TreeBuilder};
pub use widget::{TreeMultiselect, TreeMultiselectBuilder};
