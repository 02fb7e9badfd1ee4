use crossterm::style::Color;

use crate::tree::SectionState;

/// Design tokens for the treeselect UI.
///
/// All icons used by the renderers are sourced from this module.
pub mod colors {
    use super::Color;

    /// #06B6D4
    pub const ACCENT: Color = Color::Cyan;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    /// Removes an item from the selected panel
    pub const REMOVE: &str = "×";
    /// Marks options that carry a description
    pub const DESCRIPTION: &str = "?";
    pub const CURSOR: &str = ">";
    pub const RULE: &str = "─";
}

pub mod icons_ascii {
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const REMOVE: &str = "x";
    pub const DESCRIPTION: &str = "?";
    pub const CURSOR: &str = ">";
    pub const RULE: &str = "-";
}

/// Icon set picked once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub selected: &'static str,
    pub unselected: &'static str,
    pub partial: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub remove: &'static str,
    pub description: &'static str,
    pub cursor: &'static str,
    pub rule: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                selected: icons::SELECTED,
                unselected: icons::UNSELECTED,
                partial: icons::PARTIAL,
                expand: icons::EXPAND,
                collapse: icons::COLLAPSE,
                remove: icons::REMOVE,
                description: icons::DESCRIPTION,
                cursor: icons::CURSOR,
                rule: icons::RULE,
            }
        } else {
            Self {
                selected: icons_ascii::SELECTED,
                unselected: icons_ascii::UNSELECTED,
                partial: icons_ascii::PARTIAL,
                expand: icons_ascii::EXPAND,
                collapse: icons_ascii::COLLAPSE,
                remove: icons_ascii::REMOVE,
                description: icons_ascii::DESCRIPTION,
                cursor: icons_ascii::CURSOR,
                rule: icons_ascii::RULE,
            }
        }
    }

    /// Checkbox icon for a section state
    pub fn state(&self, state: SectionState) -> &'static str {
        match state {
            SectionState::Checked => self.selected,
            SectionState::Unchecked => self.unselected,
            SectionState::Indeterminate => self.partial,
        }
    }

    /// Checkbox icon for a leaf
    pub fn checkbox(&self, checked: bool) -> &'static str {
        if checked {
            self.selected
        } else {
            self.unselected
        }
    }

    /// Icon for an expanded (`true`) or collapsed section
    pub fn expansion(&self, expanded: bool) -> &'static str {
        if expanded {
            self.expand
        } else {
            self.collapse
        }
    }
}
