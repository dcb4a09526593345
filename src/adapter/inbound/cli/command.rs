//! Command-line interface definitions.
//!
//! Defines the CLI structure for the mintwatch binary using `clap`. Running
//! without a subcommand starts the service.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "mintwatch.toml";

/// Relay Helius NFT mint webhooks to a Telegram chat
#[derive(Parser, Debug)]
#[command(name = "mintwatch")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (optional; defaults apply when absent)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The selected subcommand, `run` when none was given.
    #[must_use]
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the mintwatch CLI.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the webhook server and Telegram bot (default)
    Run,

    /// Validate configuration without connecting to Telegram
    Check,

    /// Normalize a saved webhook payload and print the results
    Normalize(NormalizeArgs),
}

/// Arguments for `normalize`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct NormalizeArgs {
    /// JSON file holding one record or an array of records
    pub file: PathBuf,
}
