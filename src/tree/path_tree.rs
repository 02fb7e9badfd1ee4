//! The built tree plus a value index for direct leaf lookup.

use std::collections::HashMap;

use super::node::{Leaf, Node, Section, SectionState};

/// Root section plus a value → child-index path index
#[derive(Debug, Clone)]
pub struct PathTree {
    pub(crate) root: Section,
    pub(crate) leaf_paths: HashMap<String, Vec<usize>>,
    pub(crate) delimiter: String,
}

impl PathTree {
    /// Unnamed root section
    pub fn root(&self) -> &Section {
        &self.root
    }

    /// Delimiter used to join section names
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Leaf with the given value
    pub fn leaf(&self, value: &str) -> Option<&Leaf> {
        let path = self.leaf_paths.get(value)?;
        let (last, sections) = path.split_last()?;
        let mut section = &self.root;
        for &idx in sections {
            section = section.children().get(idx)?.as_section()?;
        }
        section.children().get(*last)?.as_leaf()
    }

    /// Section addressed by its segment names, root excluded
    ///
    /// An empty path addresses the root.
    pub fn section<S: AsRef<str>>(&self, path: &[S]) -> Option<&Section> {
        let mut section = &self.root;
        for name in path {
            section = section.section(name.as_ref())?;
        }
        Some(section)
    }

    /// State of the section at `path`
    pub fn section_state<S: AsRef<str>>(&self, path: &[S]) -> Option<SectionState> {
        self.section(path).map(Section::state)
    }

    /// Total number of leaves
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// True when no options were supplied
    pub fn is_empty(&self) -> bool {
        self.leaf_paths.is_empty()
    }

    /// Every section path in depth-first order, root excluded
    pub fn section_paths(&self) -> Vec<Vec<String>> {
        fn walk(section: &Section, trail: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
            for child in section.children() {
                if let Node::Section(child) = child {
                    trail.push(child.name().to_string());
                    out.push(trail.clone());
                    walk(child, trail, out);
                    trail.pop();
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.root, &mut Vec::new(), &mut out);
        out
    }

    /// Child-index path of a leaf
    pub(crate) fn leaf_path(&self, value: &str) -> Option<&[usize]> {
        self.leaf_paths.get(value).map(Vec::as_slice)
    }

    /// Child-index path of a section, `None` if any segment is unknown
    pub(crate) fn section_index_path<S: AsRef<str>>(&self, path: &[S]) -> Option<Vec<usize>> {
        let mut indices = Vec::with_capacity(path.len());
        let mut section = &self.root;
        for name in path {
            let idx = section.section_position(name.as_ref())?;
            indices.push(idx);
            section = section.children().get(idx)?.as_section()?;
        }
        Some(indices)
    }

    /// Join section names with the tree's delimiter
    pub fn join_path<S: AsRef<str>>(&self, names: &[S]) -> String {
        names
            .iter()
            .map(|name| name.as_ref())
            .collect::<Vec<_>>()
            .join(self.delimiter.as_str())
    }
}
