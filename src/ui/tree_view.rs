//! Tree rendering and presentation state.
//!
//! Collapse state and the cursor live here, not in the selection core:
//! collapsing a section never changes what is selected.

use std::collections::HashSet;

use crate::config::Options;
use crate::tree::{Node, PathTree, Section, SectionState};
use crate::widget::TreeMultiselect;

use super::theme::Icons;

/// One visible line of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 0 for top-level sections
    pub depth: usize,
    pub kind: RowKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Section {
        /// Segment names from the top level down
        path: Vec<String>,
        state: SectionState,
        checked: usize,
        total: usize,
        collapsed: bool,
    },
    Leaf {
        value: String,
        label: String,
        checked: bool,
        has_description: bool,
    },
}

impl Row {
    /// Display text: section name or leaf label
    pub fn text(&self) -> &str {
        match &self.kind {
            RowKind::Section { path, .. } => path.last().map(String::as_str).unwrap_or(""),
            RowKind::Leaf { label, .. } => label.as_str(),
        }
    }
}

/// Collapse set and cursor for one rendered tree
#[derive(Debug, Clone, Default)]
pub struct TreeView {
    collapsed: HashSet<Vec<String>>,
    collapsible: bool,
    pub(super) cursor: usize,
}

impl TreeView {
    /// Seed the view from widget options
    pub fn new(tree: &PathTree, options: &Options) -> Self {
        let collapsed = if options.collapsible && options.start_collapsed {
            tree.section_paths().into_iter().collect()
        } else {
            HashSet::new()
        };
        Self {
            collapsed,
            collapsible: options.collapsible,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_collapsed<S: AsRef<str>>(&self, path: &[S]) -> bool {
        let key: Vec<String> = path.iter().map(|s| s.as_ref().to_string()).collect();
        self.collapsed.contains(&key)
    }

    /// Collapse a section; returns whether anything changed
    pub fn collapse(&mut self, path: &[String]) -> bool {
        self.collapsible && self.collapsed.insert(path.to_vec())
    }

    /// Expand a section; returns whether anything changed
    pub fn expand(&mut self, path: &[String]) -> bool {
        self.collapsed.remove(path)
    }

    /// Visible rows in depth-first order
    pub fn flatten(&self, tree: &PathTree) -> Vec<Row> {
        let mut rows = Vec::new();
        self.flatten_section(tree.root(), &mut Vec::new(), &mut rows);
        rows
    }

    fn flatten_section(&self, section: &Section, trail: &mut Vec<String>, rows: &mut Vec<Row>) {
        let depth = trail.len();
        for child in section.children() {
            match child {
                Node::Section(sub) => {
                    trail.push(sub.name().to_string());
                    let collapsed = self.collapsed.contains(trail.as_slice());
                    rows.push(Row {
                        depth,
                        kind: RowKind::Section {
                            path: trail.clone(),
                            state: sub.state(),
                            checked: sub.checked_count(),
                            total: sub.leaf_count(),
                            collapsed,
                        },
                    });
                    if !collapsed {
                        self.flatten_section(sub, trail, rows);
                    }
                    trail.pop();
                }
                Node::Leaf(leaf) => rows.push(Row {
                    depth,
                    kind: RowKind::Leaf {
                        value: leaf.value.clone(),
                        label: leaf.label.clone(),
                        checked: leaf.checked,
                        has_description: leaf.description.is_some(),
                    },
                }),
            }
        }
    }

    /// Render every visible row, one per line
    pub fn render(&self, widget: &TreeMultiselect, unicode: bool) -> String {
        self.render_rows(widget, unicode, None)
    }

    /// Render with the cursor marker on the active row
    pub fn render_with_cursor(&self, widget: &TreeMultiselect, unicode: bool) -> String {
        self.render_rows(widget, unicode, Some(self.cursor))
    }

    fn render_rows(&self, widget: &TreeMultiselect, unicode: bool, cursor: Option<usize>) -> String {
        let icons = Icons::new(unicode);
        let batch = widget.options().allow_batch_selection;

        let lines: Vec<String> = self
            .flatten(widget.tree())
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let marker = match cursor {
                    Some(c) if c == i => format!("{} ", icons.cursor),
                    Some(_) => "  ".to_string(),
                    None => String::new(),
                };
                format!("{}{}", marker, render_row(row, &icons, batch, self.collapsible))
            })
            .collect();
        lines.join("\n")
    }
}

/// Render a single row without cursor marker
pub fn render_row(row: &Row, icons: &Icons, batch: bool, collapsible: bool) -> String {
    let indent = "  ".repeat(row.depth);
    match &row.kind {
        RowKind::Section {
            state,
            checked,
            total,
            collapsed,
            ..
        } => {
            let expand = if collapsible {
                format!("{} ", icons.expansion(!collapsed))
            } else {
                String::new()
            };
            let state_icon = if batch {
                format!("{} ", icons.state(*state))
            } else {
                String::new()
            };
            format!(
                "{}{}{}{} ({}/{})",
                indent,
                expand,
                state_icon,
                row.text(),
                checked,
                total
            )
        }
        RowKind::Leaf {
            label,
            checked,
            has_description,
            ..
        } => {
            let description = if *has_description {
                format!(" {}", icons.description)
            } else {
                String::new()
            };
            format!(
                "{}{} {}{}",
                indent,
                icons.checkbox(*checked),
                label,
                description
            )
        }
    }
}
