//! Handler for the `check` command.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Validate configuration without starting the bot.
pub fn execute(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;

    output::section("Configuration Check");
    if config_path.exists() {
        output::field("Config", config_path.display());
    } else {
        output::field("Config", "not found, using defaults");
    }
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Bind", config.server.bind_addr()?);
    output::field("Chat ID", config.telegram.chat_id);
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);

    if config.webhook_secret.is_some() {
        output::success("Webhook secret configured");
    } else {
        output::warning("WEBHOOK_SECRET not set - webhook accepts unauthenticated calls");
    }

    if cfg!(feature = "telegram") {
        output::success("Telegram integration configured");
    } else {
        output::warning("Built without the telegram feature - notifications are only logged");
    }

    output::success("Configuration check complete");

    Ok(())
}
