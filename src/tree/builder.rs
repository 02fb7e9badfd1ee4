//! Tree construction from flat option records.
//!
//! Each record names the sections it lives under. Sections with the same
//! name at the same level are merged; both sections and leaves keep the
//! order in which they first appear in the input.

use std::collections::HashMap;

use tracing::debug;

use super::node::{Leaf, Section};
use super::path_tree::PathTree;
use crate::error::{TreeSelectError, TreeSelectResult};

/// Default section delimiter
pub const DEFAULT_DELIMITER: &str = "/";

/// One option as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRecord {
    /// Unique identifier
    pub value: String,
    /// Display text, falls back to `value`
    pub label: Option<String>,
    /// Optional hover text
    pub description: Option<String>,
    /// Section names from the top level down
    pub section_path: Vec<String>,
    /// Output ordering key
    pub original_index: usize,
}

impl OptionRecord {
    /// Create a record with no label or description
    pub fn new<I, S>(value: impl Into<String>, section_path: I, original_index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into(),
            label: None,
            description: None,
            section_path: section_path.into_iter().map(Into::into).collect(),
            original_index,
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Builds a [`PathTree`] from option records
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    delimiter: String,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Delimiter used when joining section names for output
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Build the tree, failing on the first invalid record
    pub fn build(&self, records: impl IntoIterator<Item = OptionRecord>) -> TreeSelectResult<PathTree> {
        let mut root = Section::new("");
        let mut leaf_paths: HashMap<String, Vec<usize>> = HashMap::new();

        for record in records {
            if record.section_path.is_empty()
                || record.section_path.iter().any(|segment| segment.is_empty())
            {
                return Err(TreeSelectError::InvalidPath {
                    path: record.section_path.join(self.delimiter.as_str()),
                    value: record.value,
                });
            }
            if leaf_paths.contains_key(&record.value) {
                return Err(TreeSelectError::DuplicateValue {
                    value: record.value,
                });
            }

            let leaf = leaf_from(&record);
            let path = insert_record(&mut root, record.section_path, leaf, &self.delimiter)?;
            leaf_paths.insert(record.value, path);
        }

        refresh_all(&mut root);

        debug!(
            leaves = leaf_paths.len(),
            top_level = root.children().len(),
            "built option tree"
        );

        Ok(PathTree {
            root,
            leaf_paths,
            delimiter: self.delimiter.clone(),
        })
    }
}

/// Build a tree with the default delimiter
pub fn build_tree(records: impl IntoIterator<Item = OptionRecord>) -> TreeSelectResult<PathTree> {
    TreeBuilder::new().build(records)
}

fn leaf_from(record: &OptionRecord) -> Leaf {
    let label = record
        .label
        .as_deref()
        .filter(|label| !label.is_empty())
        .unwrap_or(&record.value)
        .to_string();
    Leaf {
        value: record.value.clone(),
        label,
        description: record.description.clone().filter(|d| !d.is_empty()),
        original_index: record.original_index,
        checked: false,
    }
}

/// Walk or create sections along `segments`, then append `leaf`
///
/// Returns the child-index path from the root to the new leaf.
fn insert_record(
    root: &mut Section,
    segments: Vec<String>,
    leaf: Leaf,
    delimiter: &str,
) -> TreeSelectResult<Vec<usize>> {
    let mut path = Vec::with_capacity(segments.len() + 1);
    let mut section = root;
    for segment in &segments {
        let idx = section.section_position_or_insert(segment);
        path.push(idx);
        section = match section.child_section_mut(idx) {
            Some(child) => child,
            None => {
                return Err(TreeSelectError::InvalidPath {
                    value: leaf.value,
                    path: segments.join(delimiter),
                })
            }
        };
    }
    path.push(section.push_leaf(leaf));
    Ok(path)
}

fn refresh_all(section: &mut Section) {
    for idx in 0..section.children().len() {
        if let Some(child) = section.child_section_mut(idx) {
            refresh_all(child);
        }
    }
    section.refresh_counts();
}
