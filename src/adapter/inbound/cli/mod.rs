//! CLI module graph.

pub mod check;
pub mod command;
pub mod normalize;
pub mod output;
pub mod run;

use command::{Cli, ColorChoice, Commands};
use output::OutputConfig;

use crate::error::Result;

/// Apply global flags and run the selected subcommand.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.color {
        ColorChoice::Auto => {}
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    match cli.subcommand() {
        Commands::Run => run::execute(&cli.config).await,
        Commands::Check => check::execute(&cli.config),
        Commands::Normalize(args) => normalize::execute(&args),
    }
}
