//! Platform-neutral rich chat message.
//!
//! The notifier renders events into a [`ChatMessage`]; chat adapters turn it
//! into whatever their platform understands (markup, escaping, photos).

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kind of notification; adapters pick emphasis or log level from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// New mint alert.
    Mint,
    /// Positive confirmation (startup test, status).
    Success,
    /// Processing failure.
    Error,
}

/// A labelled hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageLink {
    pub label: String,
    pub url: String,
}

impl MessageLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Content of a message field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Plain text.
    Text(String),
    /// Monospace text (addresses, hashes).
    Code(String),
    /// One or more links shown on a single line.
    Links(Vec<MessageLink>),
}

impl FieldValue {
    /// Plain-text rendering, used for logs and assertions.
    #[must_use]
    pub fn plain(&self) -> String {
        match self {
            Self::Text(s) | Self::Code(s) => s.clone(),
            Self::Links(links) => links
                .iter()
                .map(|l| format!("{} ({})", l.label, l.url))
                .collect::<Vec<_>>()
                .join(" • "),
        }
    }
}

/// A named field inside a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageField {
    pub name: String,
    pub value: FieldValue,
    /// Hint that the field may share a line with its neighbours.
    pub inline: bool,
}

impl MessageField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, FieldValue::Text(value.into()))
    }

    pub fn code(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, FieldValue::Code(value.into()))
    }

    pub fn links(name: impl Into<String>, links: Vec<MessageLink>) -> Self {
        Self::with_value(name, FieldValue::Links(links))
    }

    fn with_value(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
            inline: false,
        }
    }

    /// Mark the field as inline.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }
}

/// A rich message ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub title: String,
    /// Emphasized lead text shown before the description.
    pub headline: Option<String>,
    pub description: String,
    pub fields: Vec<MessageField>,
    pub image_url: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub footer: Option<String>,
    pub accent: Accent,
}

impl ChatMessage {
    /// Create a message stamped with the current time.
    pub fn new(title: impl Into<String>, description: impl Into<String>, accent: Accent) -> Self {
        Self {
            title: title.into(),
            headline: None,
            description: description.into(),
            fields: Vec::new(),
            image_url: None,
            timestamp: Utc::now(),
            footer: None,
            accent,
        }
    }

    #[must_use]
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: MessageField) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Look up a field by exact name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&MessageField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_fields_in_order() {
        let msg = ChatMessage::new("t", "d", Accent::Mint)
            .with_field(MessageField::code("a", "1"))
            .with_field(MessageField::text("b", "2").inline());

        assert_eq!(msg.fields.len(), 2);
        assert_eq!(msg.fields[0].name, "a");
        assert!(!msg.fields[0].inline);
        assert!(msg.fields[1].inline);
        assert_eq!(msg.field("b").map(|f| f.value.plain()), Some("2".to_string()));
        assert!(msg.field("missing").is_none());
    }

    #[test]
    fn new_message_has_no_image_footer_or_headline() {
        let msg = ChatMessage::new("t", "d", Accent::Error);
        assert!(msg.image_url.is_none());
        assert!(msg.footer.is_none());
        assert!(msg.headline.is_none());
        assert_eq!(msg.accent, Accent::Error);
    }

    #[test]
    fn links_render_plain_joined_by_bullet() {
        let value = FieldValue::Links(vec![
            MessageLink::new("A", "https://a"),
            MessageLink::new("B", "https://b"),
        ]);
        assert_eq!(value.plain(), "A (https://a) • B (https://b)");
    }
}
