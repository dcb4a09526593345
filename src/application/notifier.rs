//! Mint notifier.
//!
//! Renders events and hands them to the configured [`ChatChannel`].
//! Delivery is awaited so callers observe both ordering and failures.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{ChatMessage, MintEvent};
use crate::error::DeliveryError;
use crate::port::ChatChannel;

use super::render;
use super::status::ServiceStatus;

/// Sends rendered notifications to one chat channel.
#[derive(Clone)]
pub struct Notifier {
    channel: Arc<dyn ChatChannel>,
}

impl Notifier {
    pub fn new(channel: Arc<dyn ChatChannel>) -> Self {
        Self { channel }
    }

    /// Whether the chat client is currently connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.channel.is_connected()
    }

    /// Announce a new mint.
    pub async fn send_mint_notification(&self, event: &MintEvent) -> Result<(), DeliveryError> {
        self.deliver(render::mint_message(event)).await?;
        info!(
            channel = self.channel.name(),
            mint = %event.mint_address(),
            kind = %event.mint_kind(),
            "Sent mint notification"
        );
        Ok(())
    }

    /// Report a processing failure.
    pub async fn send_error_notification(&self, message: &str) -> Result<(), DeliveryError> {
        self.deliver(render::error_message(message)).await
    }

    /// Post the startup test message.
    pub async fn send_startup_notification(&self) -> Result<(), DeliveryError> {
        self.deliver(render::startup_message()).await?;
        info!(channel = self.channel.name(), "Sent startup message");
        Ok(())
    }

    /// Render the `/start` status report without sending it.
    #[must_use]
    pub fn status_report(&self, status: &ServiceStatus) -> ChatMessage {
        render::status_message(status, self.channel.is_connected())
    }

    async fn deliver(&self, message: ChatMessage) -> Result<(), DeliveryError> {
        self.channel.post(&message).await.inspect_err(|e| {
            warn!(
                channel = self.channel.name(),
                title = %message.title,
                error = %e,
                "Chat delivery failed"
            );
        })
    }
}
