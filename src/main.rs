//! treeselect CLI - hierarchical multi-select over sectioned options
//!
//! Usage: treeselect <COMMAND>
//!
//! Commands:
//!   show         Render the option tree and the current selection
//!   select       Apply toggles and print the ordered selection
//!   interactive  Pick options in a terminal menu

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::select::SelectArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Show { file } => {
            let ctx = commands::load_context(&file, config, cli.json, cli.ascii)?;
            commands::show::cmd_show(&ctx)
        }
        Commands::Select {
            file,
            check,
            uncheck,
            check_section,
            uncheck_section,
            remove,
        } => {
            let mut ctx = commands::load_context(&file, config, cli.json, cli.ascii)?;
            let args = SelectArgs {
                check,
                uncheck,
                check_section,
                uncheck_section,
                remove,
            };
            commands::select::cmd_select(&mut ctx, &args)
        }
        Commands::Interactive { file } => {
            let mut ctx = commands::load_context(&file, config, cli.json, cli.ascii)?;
            commands::interactive::cmd_interactive(&mut ctx)
        }
    }
}

/// Logs go to stderr so stdout stays parseable
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "treeselect=warn",
        1 => "treeselect=info",
        2 => "treeselect=debug",
        _ => "treeselect=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
