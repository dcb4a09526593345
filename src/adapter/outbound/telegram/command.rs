//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelegramCommand {
    /// Report that the tracker is live.
    Start,
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// A trailing `@botname` on the command word is ignored.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(TelegramCommand::Start),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![("start", "Check if the NFT mint tracker server is live")]
}
