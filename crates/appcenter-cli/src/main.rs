//! App Center artifact CLI
//!
//! Resolves artifacts on the agent and reports what an upload would send.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    appcenter_fs::logging::init_with_default(default_filter)
        .map_err(|e| CliError::user(format!("failed to initialise logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Inspect { paths, root, json } => {
            let root = match root {
                Some(root) => root,
                None => std::env::current_dir()?,
            };
            commands::run_inspect(&root, &paths, json)
        }
        Commands::Plan { config, json } => {
            let config = match config {
                Some(config) => config,
                None => std::env::current_dir()?.join(appcenter_fs::DEFAULT_CONFIG_FILE),
            };
            commands::run_plan(&config, json)
        }
        Commands::ContentType { paths, json } => commands::run_content_type(&paths, json),
    }
}
