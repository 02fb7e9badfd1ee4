//! Tree multiselect widget
//!
//! Wires the tree, the selection engine, the output synchronizer and the
//! collaborator ports together. Each successful mutation runs the whole
//! chain before returning: engine update, recompute, backing-list rewrite,
//! change notification.

use tracing::info;

use crate::config::Options;
use crate::error::{TreeSelectError, TreeSelectResult};
use crate::parser::split_section_path;
use crate::ports::{BackingList, FormValueList, NoopChangeSink, SelectionChangeSink};
use crate::selection::{
    reorder_backing, OutputSynchronizer, SelectionDelta, SelectionEngine, SelectionRecord,
};
use crate::tree::{OptionRecord, PathTree, SectionState, TreeBuilder};

/// Builder for [`TreeMultiselect`]
pub struct TreeMultiselectBuilder {
    records: Vec<OptionRecord>,
    options: Options,
    preselected: Vec<String>,
    backing: Option<Box<dyn BackingList>>,
    sink: Option<Box<dyn SelectionChangeSink>>,
}

impl TreeMultiselectBuilder {
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Values checked before the initial sync
    pub fn preselected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preselected = values.into_iter().map(Into::into).collect();
        self
    }

    /// List that receives the ordered selection
    ///
    /// Defaults to a [`FormValueList`] holding every option value.
    pub fn backing_list(mut self, backing: Box<dyn BackingList>) -> Self {
        self.backing = Some(backing);
        self
    }

    pub fn change_sink(mut self, sink: Box<dyn SelectionChangeSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the tree, apply preselection and run the initial sync
    pub fn build(self) -> TreeSelectResult<TreeMultiselect> {
        self.options.validate()?;

        let backing = match self.backing {
            Some(backing) => backing,
            None => Box::new(FormValueList::new(
                self.records.iter().map(|r| r.value.clone()),
            )),
        };

        let tree = TreeBuilder::new()
            .with_delimiter(self.options.section_delimiter.clone())
            .build(self.records)?;
        let mut engine = SelectionEngine::new(tree, self.options.allow_batch_selection);
        let preselected = engine.preselect(&self.preselected);

        let mut widget = TreeMultiselect {
            engine,
            options: self.options,
            sync: OutputSynchronizer::new(),
            backing,
            sink: self.sink.unwrap_or_else(|| Box::new(NoopChangeSink)),
        };
        widget.sync_output();

        info!(
            options = widget.engine.total_count(),
            preselected,
            batch = widget.options.allow_batch_selection,
            frozen = widget.options.freeze,
            "tree multiselect ready"
        );
        Ok(widget)
    }
}

/// Hierarchical multi-select over a set of options
pub struct TreeMultiselect {
    engine: SelectionEngine,
    options: Options,
    sync: OutputSynchronizer,
    backing: Box<dyn BackingList>,
    sink: Box<dyn SelectionChangeSink>,
}

impl TreeMultiselect {
    /// Start building a widget over `records`
    pub fn builder(records: impl IntoIterator<Item = OptionRecord>) -> TreeMultiselectBuilder {
        TreeMultiselectBuilder {
            records: records.into_iter().collect(),
            options: Options::default(),
            preselected: Vec::new(),
            backing: None,
            sink: None,
        }
    }

    pub fn set_leaf(&mut self, value: &str, checked: bool) -> TreeSelectResult<SelectionDelta> {
        self.mutate(|engine| engine.set_leaf(value, checked).map(drop))
    }

    pub fn toggle_leaf(&mut self, value: &str) -> TreeSelectResult<SelectionDelta> {
        let checked = self
            .engine
            .is_checked(value)
            .ok_or_else(|| TreeSelectError::value_not_found(value))?;
        self.set_leaf(value, !checked)
    }

    pub fn set_section<S: AsRef<str>>(
        &mut self,
        path: &[S],
        checked: bool,
    ) -> TreeSelectResult<SelectionDelta> {
        self.mutate(|engine| engine.set_section(path, checked).map(drop))
    }

    /// Check a section unless it is fully checked, in which case uncheck it
    pub fn toggle_section<S: AsRef<str>>(&mut self, path: &[S]) -> TreeSelectResult<SelectionDelta> {
        let state = self
            .engine
            .section_state(path)
            .ok_or_else(|| {
                TreeSelectError::section_not_found(self.engine.tree().join_path(path))
            })?;
        self.set_section(path, state != SectionState::Checked)
    }

    /// [`set_section`](Self::set_section) with a delimiter-joined path
    pub fn set_section_str(
        &mut self,
        joined_path: &str,
        checked: bool,
    ) -> TreeSelectResult<SelectionDelta> {
        let segments = split_section_path(joined_path, joined_path, &self.options.section_delimiter)
            .map_err(|_| TreeSelectError::section_not_found(joined_path))?;
        self.set_section(&segments, checked)
    }

    /// Deselect one value from the output list
    pub fn remove_selected(&mut self, value: &str) -> TreeSelectResult<SelectionDelta> {
        self.set_leaf(value, false)
    }

    pub fn select_all(&mut self) -> TreeSelectResult<SelectionDelta> {
        self.mutate(|engine| engine.select_all().map(drop))
    }

    pub fn select_none(&mut self) -> TreeSelectResult<SelectionDelta> {
        self.mutate(|engine| engine.select_none().map(drop))
    }

    pub fn invert(&mut self) -> TreeSelectResult<SelectionDelta> {
        self.mutate(|engine| engine.invert().map(drop))
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn tree(&self) -> &PathTree {
        self.engine.tree()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Ordered output of the last sync
    pub fn selected_records(&self) -> &[SelectionRecord] {
        self.sync.previous()
    }

    pub fn selected_values(&self) -> Vec<String> {
        self.sync.previous().iter().map(|r| r.value.clone()).collect()
    }

    pub fn backing_list(&self) -> &dyn BackingList {
        self.backing.as_ref()
    }

    fn mutate<F>(&mut self, op: F) -> TreeSelectResult<SelectionDelta>
    where
        F: FnOnce(&mut SelectionEngine) -> TreeSelectResult<()>,
    {
        if self.options.freeze {
            return Err(TreeSelectError::Frozen);
        }
        op(&mut self.engine)?;
        Ok(self.sync_output())
    }

    fn sync_output(&mut self) -> SelectionDelta {
        let delta = self.sync.recompute(&self.engine);
        reorder_backing(self.backing.as_mut(), &delta.ordered);
        self.sink.on_change(&delta);
        delta
    }
}
