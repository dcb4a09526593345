//! Chat channel port.
//!
//! A chat channel delivers rendered [`ChatMessage`]s to one configured
//! destination. Implementations must be thread-safe; the HTTP server shares
//! a single channel handle across all requests.

use async_trait::async_trait;

use crate::domain::{Accent, ChatMessage};
use crate::error::DeliveryError;

/// Destination for rendered notifications.
///
/// # Implementation Notes
///
/// - `post` is awaited by the caller; delivery order equals call order
/// - failures are reported, never retried by the channel
#[async_trait]
pub trait ChatChannel: Send + Sync {
    /// Channel name (for logs).
    fn name(&self) -> &str;

    /// Deliver a message.
    async fn post(&self, message: &ChatMessage) -> Result<(), DeliveryError>;

    /// Whether the underlying chat client is logged in and reachable.
    fn is_connected(&self) -> bool;
}

/// A channel that only logs messages via tracing.
///
/// Used when the binary is built without a chat platform.
pub struct LogChannel;

#[async_trait]
impl ChatChannel for LogChannel {
    fn name(&self) -> &str {
        "log"
    }

    async fn post(&self, message: &ChatMessage) -> Result<(), DeliveryError> {
        match message.accent {
            Accent::Error => tracing::warn!(
                title = %message.title,
                description = %message.description,
                "Chat message"
            ),
            Accent::Mint | Accent::Success => tracing::info!(
                title = %message.title,
                description = %message.description,
                fields = message.fields.len(),
                image = message.image_url.is_some(),
                "Chat message"
            ),
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_channel_accepts_everything() {
        let channel = LogChannel;
        for accent in [Accent::Mint, Accent::Success, Accent::Error] {
            let msg = ChatMessage::new("title", "body", accent);
            assert!(channel.post(&msg).await.is_ok());
        }
        assert!(channel.is_connected());
        assert_eq!(channel.name(), "log");
    }
}
