//! Selection state engine
//!
//! Owns the checked flags of every leaf. Section states are never assigned;
//! they are re-derived bottom-up along the touched path after each change.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{TreeSelectError, TreeSelectResult};
use crate::tree::{Leaf, Node, PathTree, Section, SectionState};

/// Tri-state selection over a [`PathTree`]
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    tree: PathTree,
    batch_selection: bool,
}

impl SelectionEngine {
    /// Wrap a freshly built tree
    pub fn new(tree: PathTree, allow_batch_selection: bool) -> Self {
        Self {
            tree,
            batch_selection: allow_batch_selection,
        }
    }

    pub fn tree(&self) -> &PathTree {
        &self.tree
    }

    /// Whether section-level toggles are allowed
    pub fn batch_selection(&self) -> bool {
        self.batch_selection
    }

    /// Set one leaf's checked flag
    ///
    /// Returns whether the flag changed.
    pub fn set_leaf(&mut self, value: &str, checked: bool) -> TreeSelectResult<bool> {
        let path = self
            .tree
            .leaf_path(value)
            .map(<[usize]>::to_vec)
            .ok_or_else(|| TreeSelectError::value_not_found(value))?;

        let changed = set_leaf_at(&mut self.tree.root, &path, checked)
            .ok_or_else(|| TreeSelectError::value_not_found(value))?;
        debug!(value, checked, changed, "set leaf");
        Ok(changed)
    }

    /// Set every leaf below a section
    ///
    /// Returns how many leaves changed.
    pub fn set_section<S: AsRef<str>>(
        &mut self,
        path: &[S],
        checked: bool,
    ) -> TreeSelectResult<usize> {
        if !self.batch_selection {
            return Err(TreeSelectError::BatchSelectionDisabled);
        }
        if path.is_empty() {
            return Err(TreeSelectError::section_not_found(self.tree.join_path(path)));
        }
        let indices = self
            .tree
            .section_index_path(path)
            .ok_or_else(|| TreeSelectError::section_not_found(self.tree.join_path(path)))?;

        let changed = set_section_at(&mut self.tree.root, &indices, checked)
            .ok_or_else(|| TreeSelectError::section_not_found(self.tree.join_path(path)))?;
        debug!(
            section = %self.tree.join_path(path),
            checked,
            changed,
            "set section"
        );
        Ok(changed)
    }

    /// Check every leaf whose value is in `values`
    ///
    /// Unknown values are skipped. Returns how many leaves matched.
    pub fn preselect<I, S>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: HashSet<String> = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect();

        let mut matched = 0;
        for value in &wanted {
            match self.set_leaf(value, true) {
                Ok(_) => matched += 1,
                Err(_) => debug!(value = %value, "ignoring unknown preselected value"),
            }
        }
        matched
    }

    /// Check every leaf
    pub fn select_all(&mut self) -> TreeSelectResult<usize> {
        self.require_batch()?;
        Ok(self.tree.root.set_all(true))
    }

    /// Uncheck every leaf
    pub fn select_none(&mut self) -> TreeSelectResult<usize> {
        self.require_batch()?;
        Ok(self.tree.root.set_all(false))
    }

    /// Flip every leaf
    pub fn invert(&mut self) -> TreeSelectResult<usize> {
        self.require_batch()?;
        Ok(self.tree.root.invert_all())
    }

    /// Checked flag of a leaf, `None` if unknown
    pub fn is_checked(&self, value: &str) -> Option<bool> {
        self.tree.leaf(value).map(|leaf| leaf.checked)
    }

    /// Derived state of a section, `None` if unknown
    pub fn section_state<S: AsRef<str>>(&self, path: &[S]) -> Option<SectionState> {
        self.tree.section_state(path)
    }

    /// Number of checked leaves
    pub fn selected_count(&self) -> usize {
        self.tree.root().checked_count()
    }

    /// Number of leaves
    pub fn total_count(&self) -> usize {
        self.tree.root().leaf_count()
    }

    /// Every checked leaf in tree order with its joined section path
    pub fn checked_leaves(&self) -> Vec<(&Leaf, String)> {
        let delimiter = self.tree.delimiter();
        let mut out = Vec::with_capacity(self.selected_count());
        self.tree
            .root()
            .visit_leaves(&mut Vec::new(), &mut |leaf, trail| {
                if leaf.checked {
                    out.push((leaf, trail.join(delimiter)));
                }
            });
        out
    }

    fn require_batch(&self) -> TreeSelectResult<()> {
        if self.batch_selection {
            Ok(())
        } else {
            Err(TreeSelectError::BatchSelectionDisabled)
        }
    }
}

/// Set the leaf at `path`, refreshing every section on the way back up
///
/// `None` if the path does not lead to a leaf; nothing is modified then.
fn set_leaf_at(section: &mut Section, path: &[usize], checked: bool) -> Option<bool> {
    let (&idx, rest) = path.split_first()?;
    let changed = match section.child_mut(idx)? {
        Node::Leaf(leaf) if rest.is_empty() => {
            let changed = leaf.checked != checked;
            leaf.checked = checked;
            changed
        }
        Node::Section(child) => set_leaf_at(child, rest, checked)?,
        Node::Leaf(_) => return None,
    };
    section.refresh_counts();
    Some(changed)
}

/// Set every leaf under the section at `path`, refreshing ancestors
fn set_section_at(section: &mut Section, path: &[usize], checked: bool) -> Option<usize> {
    let Some((&idx, rest)) = path.split_first() else {
        return Some(section.set_all(checked));
    };
    let changed = set_section_at(section.child_section_mut(idx)?, rest, checked)?;
    section.refresh_counts();
    Some(changed)
}
