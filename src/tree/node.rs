//! Tree node data structures and tri-state derivation.

use std::collections::HashMap;

use serde::Serialize;

/// Tri-state of a section checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionState {
    /// No descendant leaf is checked (or there are none)
    Unchecked,
    /// Every descendant leaf is checked
    Checked,
    /// Some but not all descendant leaves are checked
    Indeterminate,
}

impl SectionState {
    /// Derive a section state from its subtree leaf counts
    pub fn from_counts(checked: usize, total: usize) -> Self {
        if total == 0 || checked == 0 {
            Self::Unchecked
        } else if checked == total {
            Self::Checked
        } else {
            Self::Indeterminate
        }
    }
}

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// Unique identifier, written to the output list
    pub value: String,
    /// Display text
    pub label: String,
    /// Optional hover text
    pub description: Option<String>,
    /// Position in the input; defines output order
    pub original_index: usize,
    /// Checkbox state
    pub checked: bool,
}

/// Discriminant for [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Section,
    Leaf,
}

/// A child of a section
#[derive(Debug, Clone)]
pub enum Node {
    Section(Section),
    Leaf(Leaf),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Section(_) => NodeKind::Section,
            Node::Leaf(_) => NodeKind::Leaf,
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Node::Section(section) => Some(section),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Section(_) => None,
        }
    }

    /// Number of leaves at or below this node
    fn leaf_count(&self) -> usize {
        match self {
            Node::Section(section) => section.leaf_count,
            Node::Leaf(_) => 1,
        }
    }

    /// Number of checked leaves at or below this node
    fn checked_count(&self) -> usize {
        match self {
            Node::Section(section) => section.checked_count,
            Node::Leaf(leaf) => usize::from(leaf.checked),
        }
    }
}

/// A named grouping level
///
/// Leaf and checked counts cover the whole subtree and are refreshed
/// bottom-up after every mutation, so [`Section::state`] always matches the
/// leaves below it.
#[derive(Debug, Clone, Default)]
pub struct Section {
    name: String,
    children: Vec<Node>,
    by_name: HashMap<String, usize>,
    leaf_count: usize,
    checked_count: usize,
}

impl Section {
    /// Create an empty section
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in first-encountered order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Derived tri-state
    pub fn state(&self) -> SectionState {
        SectionState::from_counts(self.checked_count, self.leaf_count)
    }

    /// Leaves anywhere below this section
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Checked leaves anywhere below this section
    pub fn checked_count(&self) -> usize {
        self.checked_count
    }

    /// Direct child section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.by_name
            .get(name)
            .and_then(|&idx| self.children.get(idx))
            .and_then(Node::as_section)
    }

    /// Position of the direct child section `name`, creating it if absent
    pub(crate) fn section_position_or_insert(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.by_name.get(name) {
            return idx;
        }
        let idx = self.children.len();
        self.children.push(Node::Section(Section::new(name)));
        self.by_name.insert(name.to_string(), idx);
        idx
    }

    /// Position of the direct child section `name`
    pub(crate) fn section_position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn child_section_mut(&mut self, idx: usize) -> Option<&mut Section> {
        match self.children.get_mut(idx) {
            Some(Node::Section(section)) => Some(section),
            _ => None,
        }
    }

    pub(crate) fn child_mut(&mut self, idx: usize) -> Option<&mut Node> {
        self.children.get_mut(idx)
    }

    /// Append a leaf and return its position
    pub(crate) fn push_leaf(&mut self, leaf: Leaf) -> usize {
        self.children.push(Node::Leaf(leaf));
        self.children.len() - 1
    }

    /// Recompute counts from direct children
    ///
    /// Child sections must already be up to date.
    pub(crate) fn refresh_counts(&mut self) {
        self.leaf_count = self.children.iter().map(Node::leaf_count).sum();
        self.checked_count = self.children.iter().map(Node::checked_count).sum();
    }

    /// Set every leaf below this section, returning how many changed
    pub(crate) fn set_all(&mut self, checked: bool) -> usize {
        let mut changed = 0;
        for child in &mut self.children {
            match child {
                Node::Leaf(leaf) => {
                    if leaf.checked != checked {
                        leaf.checked = checked;
                        changed += 1;
                    }
                }
                Node::Section(section) => changed += section.set_all(checked),
            }
        }
        self.refresh_counts();
        changed
    }

    /// Flip every leaf below this section
    pub(crate) fn invert_all(&mut self) -> usize {
        let mut flipped = 0;
        for child in &mut self.children {
            match child {
                Node::Leaf(leaf) => {
                    leaf.checked = !leaf.checked;
                    flipped += 1;
                }
                Node::Section(section) => flipped += section.invert_all(),
            }
        }
        self.refresh_counts();
        flipped
    }

    /// Depth-first visit of every leaf with the names of the sections above it
    ///
    /// `trail` holds the names from the first level below the root down to
    /// this section.
    pub fn visit_leaves<'a, F>(&'a self, trail: &mut Vec<&'a str>, visit: &mut F)
    where
        F: FnMut(&'a Leaf, &[&'a str]),
    {
        for child in &self.children {
            match child {
                Node::Leaf(leaf) => visit(leaf, trail),
                Node::Section(section) => {
                    trail.push(section.name());
                    section.visit_leaves(trail, visit);
                    trail.pop();
                }
            }
        }
    }
}
