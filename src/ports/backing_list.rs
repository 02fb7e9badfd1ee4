//! Backing List Port
//!
//! The externally owned list that receives the ordered selection, such as
//! the value list of a form control.

/// A list of option values with a selected subset
pub trait BackingList {
    /// Current item order
    fn items(&self) -> Vec<String>;

    /// Currently selected values, in output order
    fn selected(&self) -> Vec<String>;

    /// Replace item order and the selected values in one step
    fn rewrite(&mut self, items: Vec<String>, selected: Vec<String>);
}

/// In-memory backing list, the default for a widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValueList {
    items: Vec<String>,
    selected: Vec<String>,
}

impl FormValueList {
    /// Create a list holding `items` with nothing selected
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            selected: Vec::new(),
        }
    }
}

impl BackingList for FormValueList {
    fn items(&self) -> Vec<String> {
        self.items.clone()
    }

    fn selected(&self) -> Vec<String> {
        self.selected.clone()
    }

    fn rewrite(&mut self, items: Vec<String>, selected: Vec<String>) {
        self.items = items;
        self.selected = selected;
    }
}
