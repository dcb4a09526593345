//! Telegram implementation of [`ChatChannel`].

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};
use teloxide::RequestError;
use tracing::{info, warn};
use url::Url;

use crate::domain::ChatMessage;
use crate::error::DeliveryError;
use crate::infrastructure::config::TelegramSettings;
use crate::port::ChatChannel;

use super::format::render_markdown;

/// Telegram limit on photo captions, in characters.
const CAPTION_LIMIT: usize = 1024;

/// Posts rendered messages to one Telegram chat.
pub struct TelegramChannel {
    bot: Bot,
    chat_id: ChatId,
    connected: AtomicBool,
}

impl TelegramChannel {
    #[must_use]
    pub fn new(settings: &TelegramSettings) -> Self {
        Self {
            bot: Bot::new(&settings.bot_token),
            chat_id: ChatId(settings.chat_id),
            connected: AtomicBool::new(false),
        }
    }

    /// The underlying bot client.
    #[must_use]
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Authenticate the bot token and return the bot's username.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or Telegram is unreachable.
    pub async fn login(&self) -> Result<String, DeliveryError> {
        let me = self.bot.get_me().await.map_err(|e| self.fail(&e))?;
        self.connected.store(true, Ordering::Relaxed);
        let username = me.username().to_string();
        info!(bot = %username, "Logged in to Telegram");
        Ok(username)
    }

    /// Confirm the bot can see the target chat.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::ChannelUnavailable`] if the chat cannot be fetched.
    pub async fn resolve(&self) -> Result<(), DeliveryError> {
        let chat = self
            .bot
            .get_chat(self.chat_id)
            .await
            .map_err(|e| DeliveryError::ChannelUnavailable {
                channel: self.chat_id.to_string(),
                reason: e.to_string(),
            })?;
        info!(
            chat_id = self.chat_id.0,
            title = chat.title().unwrap_or("private chat"),
            "Resolved Telegram chat"
        );
        Ok(())
    }

    async fn send_text(&self, text: String) -> Result<(), RequestError> {
        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
        Ok(())
    }

    async fn send_photo(&self, url: Url, caption: String) -> Result<(), RequestError> {
        self.bot
            .send_photo(self.chat_id, InputFile::url(url))
            .caption(caption)
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
        Ok(())
    }

    /// Record a failed request, marking the client disconnected on network errors.
    fn fail(&self, error: &RequestError) -> DeliveryError {
        if matches!(error, RequestError::Network(_)) {
            self.connected.store(false, Ordering::Relaxed);
        }
        DeliveryError::Platform(error.to_string())
    }
}

#[async_trait]
impl ChatChannel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn post(&self, message: &ChatMessage) -> Result<(), DeliveryError> {
        let text = render_markdown(message);

        let photo = message
            .image_url
            .as_deref()
            .filter(|_| text.chars().count() <= CAPTION_LIMIT)
            .and_then(|image| match Url::parse(image) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!(image, error = %e, "Ignoring invalid image URL");
                    None
                }
            });

        if let Some(url) = photo {
            match self.send_photo(url, text.clone()).await {
                Ok(()) => {
                    self.connected.store(true, Ordering::Relaxed);
                    return Ok(());
                }
                // Telegram fetches the image itself; an unreachable image
                // should not cost the notification.
                Err(e) => warn!(error = %e, "Photo delivery failed, sending text only"),
            }
        }

        self.send_text(text).await.map_err(|e| self.fail(&e))?;
        self.connected.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }
}
