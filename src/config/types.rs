//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TreeSelectError, TreeSelectResult};
use crate::tree::DEFAULT_DELIMITER;

use super::loader::{self, ConfigWarning};

/// Widget options
///
/// Keys are snake_case; the camelCase spellings are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Enables section checkboxes and bulk operations
    #[serde(default = "default_true", alias = "allowBatchSelection")]
    pub allow_batch_selection: bool,

    /// Sections can be collapsed (presentation only)
    #[serde(default = "default_true")]
    pub collapsible: bool,

    /// Rejects every mutation and renders read-only
    #[serde(default)]
    pub freeze: bool,

    /// Hides the selected-items panel (presentation only)
    #[serde(default, alias = "hideSidePanel")]
    pub hide_side_panel: bool,

    /// Separator between section names
    #[serde(default = "default_delimiter", alias = "sectionDelimiter")]
    pub section_delimiter: String,

    /// Shows the section path next to each selected item (presentation only)
    #[serde(default = "default_true", alias = "showSectionOnSelected")]
    pub show_section_on_selected: bool,

    /// Sections start collapsed (presentation only)
    #[serde(default, alias = "startCollapsed")]
    pub start_collapsed: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_batch_selection: true,
            collapsible: true,
            freeze: false,
            hide_side_panel: false,
            section_delimiter: default_delimiter(),
            show_section_on_selected: true,
            start_collapsed: false,
        }
    }
}

impl Options {
    /// Reject option combinations the widget cannot work with
    pub fn validate(&self) -> TreeSelectResult<()> {
        if self.section_delimiter.is_empty() {
            return Err(TreeSelectError::InvalidConfig {
                file: "<options>".into(),
                message: "section_delimiter must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Force ASCII icons
    #[serde(default)]
    pub ascii: bool,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            ascii: false,
            unicode: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub widget: Options,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TreeSelectResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> TreeSelectResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply `TREESELECT_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Whether renderers may use unicode icons
    pub fn use_unicode(&self) -> bool {
        self.output.unicode && !self.output.ascii
    }
}
