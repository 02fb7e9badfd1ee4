//! Output synchronizer
//!
//! Turns engine state into the ordered selected-items list, diffs it against
//! the previous pass, and rewrites the backing list to match.

use std::collections::HashMap;

use super::engine::SelectionEngine;
use super::record::{SelectionDelta, SelectionRecord};
use crate::ports::BackingList;

/// Remembers the previous ordered output between passes
#[derive(Debug, Clone, Default)]
pub struct OutputSynchronizer {
    previous: Vec<SelectionRecord>,
}

impl OutputSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output of the last pass
    pub fn previous(&self) -> &[SelectionRecord] {
        &self.previous
    }

    /// Derive the ordered selection and diff it against the last pass
    pub fn recompute(&mut self, engine: &SelectionEngine) -> SelectionDelta {
        let mut ordered: Vec<SelectionRecord> = engine
            .checked_leaves()
            .into_iter()
            .map(|(leaf, section_path)| SelectionRecord {
                value: leaf.value.clone(),
                label: leaf.label.clone(),
                section_path,
                original_index: leaf.original_index,
            })
            .collect();
        // stable: equal indices keep tree order
        ordered.sort_by_key(|record| record.original_index);

        let delta = SelectionDelta::between(&self.previous, ordered);
        self.previous = delta.ordered.clone();
        delta
    }
}

/// Order `items` so selected values come first, in `ordered` order
///
/// Unselected items trail in their existing relative order.
pub fn order_items(items: Vec<String>, ordered: &[String]) -> Vec<String> {
    let rank: HashMap<&str, usize> = ordered
        .iter()
        .enumerate()
        .map(|(pos, value)| (value.as_str(), pos))
        .collect();

    let mut keyed: Vec<(usize, String)> = items
        .into_iter()
        .map(|item| (rank.get(item.as_str()).copied().unwrap_or(usize::MAX), item))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Write the ordered selection to a backing list and reorder its items
pub fn reorder_backing(backing: &mut dyn BackingList, ordered: &[SelectionRecord]) {
    let values: Vec<String> = ordered.iter().map(|r| r.value.clone()).collect();
    let items = order_items(backing.items(), &values);
    backing.rewrite(items, values);
}
