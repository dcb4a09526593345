//! Handler for the `run` command.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Execute the run command.
pub async fn execute(config_path: &Path) -> Result<()> {
    let mut config = Config::load(config_path)?;
    if output::is_json() {
        config.logging.format = "json".into();
    }
    config.init_logging();

    if !output::is_quiet() || output::is_json() {
        print_startup_config(&config);
    }

    bootstrap::run(config).await
}

fn print_startup_config(config: &Config) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field(
        "Listen",
        format!("{}:{}", config.server.host, config.server.port),
    );
    output::field("Chat ID", config.telegram.chat_id);
    if config.webhook_secret.is_none() {
        output::warning("WEBHOOK_SECRET not set - webhook accepts unauthenticated calls");
    }
}
