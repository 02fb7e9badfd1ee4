//! Configuration module for treeselect
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREESELECT_*)
//! 3. Project config (treeselect.toml)
//! 4. User config (~/.config/treeselect/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, Options, OutputConfig};
