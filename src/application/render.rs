//! Message rendering.
//!
//! Pure functions from events to [`ChatMessage`]s. Nothing here talks to a
//! chat platform, so tests can assert on exactly what would be sent.

use chrono::{DateTime, Utc};

use crate::domain::{Accent, ChatMessage, MessageField, MessageLink, MintEvent};

use super::status::ServiceStatus;

pub const MINT_TITLE: &str = "🎨 New NFT Minted!";
pub const ERROR_TITLE: &str = "❌ Error Processing Mint";
pub const STARTUP_TITLE: &str = "✅ Webhook Test Successful";
pub const STATUS_TITLE: &str = "🟢 NFT Mint Tracker - Server Status";

pub const FIELD_MINT: &str = "🏷️ Mint Address";
pub const FIELD_CREATOR: &str = "👤 Creator";
pub const FIELD_LINKS: &str = "🔗 Links";
pub const FIELD_FEE_PAYER: &str = "💳 Fee Payer";
pub const FIELD_TYPE: &str = "📦 Type";

const SOLSCAN: &str = "https://solscan.io";

/// Characters kept at the start of a shortened address.
const ADDRESS_HEAD: usize = 20;
/// Characters kept at the end of a shortened address.
const ADDRESS_TAIL: usize = 10;
/// Characters of the signature shown in the footer.
const SIGNATURE_PREVIEW: usize = 20;

/// Render a mint notification.
#[must_use]
pub fn mint_message(event: &MintEvent) -> ChatMessage {
    let description = if event.symbol().is_empty() {
        String::new()
    } else {
        format!("({})", event.symbol())
    };

    let mut links = vec![MessageLink::new(
        "View on Solscan",
        format!("{SOLSCAN}/token/{}", event.mint_address()),
    )];
    if let Some(signature) = event.signature() {
        links.push(MessageLink::new(
            "View Transaction",
            format!("{SOLSCAN}/tx/{signature}"),
        ));
    }

    let mut message = ChatMessage::new(MINT_TITLE, description, Accent::Mint)
        .with_headline(event.name())
        .with_field(MessageField::code(FIELD_MINT, event.mint_address()))
        .with_field(MessageField::code(
            FIELD_CREATOR,
            shorten(event.creator_address(), ADDRESS_HEAD, ADDRESS_TAIL),
        ))
        .with_field(MessageField::links(FIELD_LINKS, links))
        .with_timestamp(event_time(event.timestamp_seconds()))
        .with_footer(signature_footer(event.signature()));

    if let Some(fee_payer) = event.fee_payer() {
        message = message.with_field(MessageField::code(
            FIELD_FEE_PAYER,
            shorten(fee_payer, ADDRESS_HEAD, ADDRESS_TAIL),
        ));
    }

    if let Some(image) = event.image_url() {
        message = message.with_image(image);
    }

    if event.mint_kind().is_compressed() {
        message = message.with_field(MessageField::text(FIELD_TYPE, "Compressed NFT (cNFT)").inline());
    }

    message
}

/// Render an error notification.
#[must_use]
pub fn error_message(error: &str) -> ChatMessage {
    ChatMessage::new(ERROR_TITLE, error, Accent::Error)
}

/// Render the startup message that proves channel access.
#[must_use]
pub fn startup_message() -> ChatMessage {
    ChatMessage::new(
        STARTUP_TITLE,
        "Your NFT mint tracker is now active and listening for mints!",
        Accent::Success,
    )
}

/// Render the `/start` status report.
#[must_use]
pub fn status_message(status: &ServiceStatus, chat_connected: bool) -> ChatMessage {
    let chat = if chat_connected {
        "✅ Connected"
    } else {
        "❌ Disconnected"
    };

    ChatMessage::new(
        STATUS_TITLE,
        "The bot is online and ready to track NFT mints!",
        Accent::Success,
    )
    .with_field(MessageField::text("📊 Status", "Running").inline())
    .with_field(MessageField::text("🔗 Telegram", chat).inline())
    .with_field(MessageField::text("🌐 Webhook Server", format!("✅ Port {}", status.port())).inline())
    .with_field(MessageField::text("⏱️ Uptime", status.uptime()).inline())
    .with_field(MessageField::code("📡 Webhook Endpoint", status.webhook_endpoint()))
    .with_footer("Powered by Helius")
}

/// Shorten an address to `head...tail` characters (Unicode-safe).
///
/// Values that already fit in `head + tail` characters are returned whole.
#[must_use]
pub fn shorten(address: &str, head: usize, tail: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= head + tail {
        return address.to_string();
    }
    let start: String = address.chars().take(head).collect();
    let end: String = address.chars().skip(char_count - tail).collect();
    format!("{start}...{end}")
}

fn signature_footer(signature: Option<&str>) -> String {
    match signature {
        Some(sig) => {
            let preview: String = sig.chars().take(SIGNATURE_PREVIEW).collect();
            format!("Signature: {preview}...")
        }
        None => "Signature: unknown".to_string(),
    }
}

fn event_time(seconds: Option<i64>) -> DateTime<Utc> {
    seconds
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .unwrap_or_else(Utc::now)
}
