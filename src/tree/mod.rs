//! Option tree
//!
//! A hierarchical tree of sections and selectable leaves, built from flat
//! records that each carry a section path.
//!
//! # Module Structure
//!
//! - `node` - Section/Leaf nodes and tri-state derivation
//! - `path_tree` - The built tree with value lookup
//! - `builder` - Tree construction from option records

mod builder;
mod node;
mod path_tree;

pub use builder::{build_tree, OptionRecord, TreeBuilder, DEFAULT_DELIMITER};
pub use node::{Leaf, Node, NodeKind, Section, SectionState};
pub use path_tree::PathTree;
