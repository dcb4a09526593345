//! Background worker answering bot commands.

use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::application::{Notifier, ServiceStatus};

use super::command::{bot_commands, parse_command, TelegramCommand};
use super::format::render_markdown;

/// Register the command menu and spawn the command listener.
pub fn spawn_command_worker(bot: Bot, notifier: Notifier, status: ServiceStatus) -> JoinHandle<()> {
    tokio::spawn(command_worker(bot, notifier, status))
}

async fn command_worker(bot: Bot, notifier: Notifier, status: ServiceStatus) {
    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Telegram command listener started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let notifier = notifier.clone();
        let status = status.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            match parse_command(text) {
                Ok(TelegramCommand::Start) => {
                    let report = render_markdown(&notifier.status_report(&status));
                    if let Err(e) = bot
                        .send_message(msg.chat.id, report)
                        .parse_mode(ParseMode::MarkdownV2)
                        .await
                    {
                        error!(error = %e, "Failed to send Telegram command response");
                    }
                }
                Err(e) => debug!(chat_id = msg.chat.id.0, reason = %e, "Ignoring message"),
            }

            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
