//! Output projections of the selection.

use std::collections::HashSet;

use serde::Serialize;

/// One selected leaf as seen by the output list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionRecord {
    pub value: String,
    pub label: String,
    /// Section names joined with the delimiter, root excluded
    pub section_path: String,
    pub original_index: usize,
}

/// Result of one synchronizer pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionDelta {
    /// Records selected since the previous pass, in output order
    pub added: Vec<SelectionRecord>,
    /// Values deselected since the previous pass, in previous output order
    pub removed: Vec<String>,
    /// Full current selection, sorted by original index
    pub ordered: Vec<SelectionRecord>,
}

impl SelectionDelta {
    /// Diff `ordered` against an earlier output, by value
    pub fn between(previous: &[SelectionRecord], ordered: Vec<SelectionRecord>) -> Self {
        let before: HashSet<&str> = previous.iter().map(|r| r.value.as_str()).collect();
        let now: HashSet<&str> = ordered.iter().map(|r| r.value.as_str()).collect();

        let added = ordered
            .iter()
            .filter(|r| !before.contains(r.value.as_str()))
            .cloned()
            .collect();
        let removed = previous
            .iter()
            .filter(|r| !now.contains(r.value.as_str()))
            .map(|r| r.value.clone())
            .collect();

        Self {
            added,
            removed,
            ordered,
        }
    }

    /// True when nothing was added or removed
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Values of `ordered`
    pub fn ordered_values(&self) -> Vec<String> {
        self.ordered.iter().map(|r| r.value.clone()).collect()
    }
}
