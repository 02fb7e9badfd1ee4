use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// treeselect - hierarchical multi-select over sectioned options
#[derive(Parser, Debug)]
#[command(name = "treeselect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./treeselect.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Force ASCII icons
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the option tree and the current selection
    Show {
        /// Options document (JSON or TOML)
        file: PathBuf,
    },

    /// Apply toggles and print the ordered selection
    ///
    /// Groups are applied in order: check, uncheck, check-section,
    /// uncheck-section, remove.
    Select {
        /// Options document (JSON or TOML)
        file: PathBuf,

        /// Check an option by value
        #[arg(long = "check", value_name = "VALUE")]
        check: Vec<String>,

        /// Uncheck an option by value
        #[arg(long = "uncheck", value_name = "VALUE")]
        uncheck: Vec<String>,

        /// Check every option below a section (delimiter-joined path)
        #[arg(long = "check-section", value_name = "PATH")]
        check_section: Vec<String>,

        /// Uncheck every option below a section
        #[arg(long = "uncheck-section", value_name = "PATH")]
        uncheck_section: Vec<String>,

        /// Remove a value from the selection
        #[arg(long = "remove", value_name = "VALUE")]
        remove: Vec<String>,
    },

    /// Pick options in a terminal menu
    Interactive {
        /// Options document (JSON or TOML)
        file: PathBuf,
    },
}
