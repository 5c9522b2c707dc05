//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect build artifacts before uploading them to App Center
#[derive(Parser, Debug)]
#[command(name = "appcenter-artifact")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show name, size and content type of artifacts
    ///
    /// Examples:
    ///   appcenter-artifact inspect app/build/outputs/apk/release/app.apk
    ///   appcenter-artifact inspect --root /agent/ws out/App.msix --json
    Inspect {
        /// Artifact paths, relative to the root or absolute
        #[arg(required = true)]
        paths: Vec<String>,

        /// Agent workspace to resolve paths against (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve every artifact named by an upload config
    Plan {
        /// Upload config file (TOML, JSON or YAML)
        #[arg(short, long, env = "APPCENTER_CONFIG")]
        config: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the upload content type of paths without reading them
    ContentType {
        /// Paths to classify
        #[arg(required = true)]
        paths: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
