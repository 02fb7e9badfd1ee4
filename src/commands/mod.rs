//! Subcommand implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use treeselect::config::Config;
use treeselect::ui::detect_capabilities;
use treeselect::{load_document, TreeMultiselect};

pub mod interactive;
pub mod select;
pub mod show;

/// Loaded widget plus the settings every command renders with
pub struct CommandContext {
    pub widget: TreeMultiselect,
    pub unicode: bool,
    pub json: bool,
}

/// Resolve configuration, parse the options document and build the widget
pub fn load_context(
    file: &Path,
    config_path: Option<&Path>,
    json: bool,
    ascii: bool,
) -> Result<CommandContext> {
    let config = match config_path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            for warning in &warnings {
                warn!(
                    key = %warning.key,
                    file = %warning.file.display(),
                    line = ?warning.line,
                    suggestion = ?warning.suggestion,
                    "unknown config key"
                );
            }
            config.with_env_overrides()
        }
        None => {
            let cwd = std::env::current_dir().context("reading current directory")?;
            Config::load_or_default(Some(&cwd))
        }
    };

    let document = load_document(file)
        .with_context(|| format!("loading options from {}", file.display()))?;
    let preselected = document.preselected.clone();
    let records = document.into_records(&config.widget.section_delimiter)?;

    let widget = TreeMultiselect::builder(records)
        .options(config.widget.clone())
        .preselected(preselected)
        .build()?;

    let unicode = !ascii && config.use_unicode() && detect_capabilities().supports_unicode;

    Ok(CommandContext {
        widget,
        unicode,
        json,
    })
}

/// Print one value per line, or a JSON array
pub fn print_values(values: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(values)?);
    } else {
        for value in values {
            println!("{}", value);
        }
    }
    Ok(())
}
