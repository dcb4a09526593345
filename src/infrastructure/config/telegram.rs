//! Telegram credentials.

use std::fmt;

/// Bot credential and target chat, read from the environment only.
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramSettings {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for notifications.
    pub chat_id: i64,
}

impl fmt::Debug for TelegramSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramSettings")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_token() {
        let settings = TelegramSettings {
            bot_token: "123:secret".into(),
            chat_id: -100,
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("-100"));
    }
}
