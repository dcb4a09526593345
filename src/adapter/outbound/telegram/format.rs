//! `MarkdownV2` rendering of chat messages.

use crate::domain::{ChatMessage, FieldValue, MessageField, MessageLink};

/// Characters of the description kept before truncation.
const MAX_DESCRIPTION: usize = 1500;

/// Render a message as Telegram `MarkdownV2` text.
///
/// Consecutive inline fields share one line.
#[must_use]
pub fn render_markdown(message: &ChatMessage) -> String {
    let mut lines = vec![format!("*{}*", escape_markdown(&message.title))];

    let description = escape_markdown(&truncate(&message.description, MAX_DESCRIPTION));
    let lead = match (&message.headline, description.is_empty()) {
        (Some(headline), true) => format!("*{}*", escape_markdown(headline)),
        (Some(headline), false) => format!("*{}* {description}", escape_markdown(headline)),
        (None, _) => description,
    };
    if !lead.is_empty() {
        lines.push(String::new());
        lines.push(lead);
    }

    if !message.fields.is_empty() {
        lines.push(String::new());
        let mut inline_run: Vec<String> = Vec::new();
        for field in &message.fields {
            if field.inline {
                inline_run.push(render_field(field));
                continue;
            }
            if !inline_run.is_empty() {
                lines.push(inline_run.join(" · "));
                inline_run.clear();
            }
            lines.push(render_field(field));
        }
        if !inline_run.is_empty() {
            lines.push(inline_run.join(" · "));
        }
    }

    let stamp = message.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let footer = match &message.footer {
        Some(footer) => format!("{footer} • {stamp}"),
        None => stamp,
    };
    lines.push(String::new());
    lines.push(format!("_{}_", escape_markdown(&footer)));

    lines.join("\n")
}

fn render_field(field: &MessageField) -> String {
    let value = match &field.value {
        FieldValue::Text(text) => escape_markdown(text),
        FieldValue::Code(code) => format!("`{}`", escape_code(code)),
        FieldValue::Links(links) => links
            .iter()
            .map(render_link)
            .collect::<Vec<_>>()
            .join(" • "),
    };
    format!("*{}*: {value}", escape_markdown(&field.name))
}

fn render_link(link: &MessageLink) -> String {
    format!("[{}]({})", escape_markdown(&link.label), escape_url(&link.url))
}

/// Truncate to `max_chars` characters, appending `...` when shortened.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Inside code spans only the backtick and backslash are escaped.
fn escape_code(text: &str) -> String {
    escape_only(text, &['`', '\\'])
}

/// Inside the `(...)` of an inline link only `)` and backslash are escaped.
fn escape_url(url: &str) -> String {
    escape_only(url, &[')', '\\'])
}

fn escape_only(text: &str, chars: &[char]) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::application::render;
    use crate::domain::{Accent, MintKind};
    use crate::testkit::events::MintEventBuilder;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("Mad Lad #42"), "Mad Lad \\#42");
        assert_eq!(escape_markdown("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("日本語テスト", 3), "日本語...");
    }

    #[test]
    fn code_spans_escape_only_backticks() {
        assert_eq!(escape_code("a_b`c"), "a_b\\`c");
    }

    #[test]
    fn link_urls_escape_closing_paren() {
        let link = MessageLink::new("Solscan", "https://x.io/a_(b)");
        assert_eq!(render_link(&link), "[Solscan](https://x.io/a_(b\\))");
    }

    #[test]
    fn mint_message_renders_headline_fields_and_footer() {
        let event = MintEventBuilder::new()
            .mint_address("Mint111")
            .timestamp(Some(1_700_000_000))
            .build();
        let text = render_markdown(&render::mint_message(&event));

        assert!(text.starts_with("*🎨 New NFT Minted\\!*"));
        assert!(text.contains("*Mad Lad \\#42* \\(MAD\\)"));
        assert!(text.contains("*🏷️ Mint Address*: `Mint111`"));
        assert!(text.contains("[View on Solscan](https://solscan.io/token/Mint111)"));
        assert!(text.contains(" • [View Transaction](https://solscan.io/tx/5VERY"));
        assert!(text.ends_with("_Signature: 5VERYLONGSIGNATUREab\\.\\.\\. • 2023\\-11\\-14 22:13:20 UTC_"));
    }

    #[test]
    fn compressed_badge_is_rendered() {
        let event = MintEventBuilder::new().kind(MintKind::Compressed).build();
        let text = render_markdown(&render::mint_message(&event));
        assert!(text.contains("*📦 Type*: Compressed NFT \\(cNFT\\)"));
    }

    #[test]
    fn inline_fields_share_a_line() {
        let message = ChatMessage::new("T", "", Accent::Success)
            .with_field(MessageField::text("A", "1").inline())
            .with_field(MessageField::text("B", "2").inline())
            .with_field(MessageField::text("C", "3"))
            .with_timestamp(DateTime::from_timestamp(0, 0).unwrap());
        let text = render_markdown(&message);

        assert!(text.contains("*A*: 1 · *B*: 2\n*C*: 3"));
        assert!(text.ends_with("_1970\\-01\\-01 00:00:00 UTC_"));
    }

    #[test]
    fn empty_description_without_headline_is_omitted() {
        let message = ChatMessage::new("Title", "", Accent::Success)
            .with_timestamp(DateTime::from_timestamp(0, 0).unwrap());
        assert_eq!(
            render_markdown(&message),
            "*Title*\n\n_1970\\-01\\-01 00:00:00 UTC_"
        );
    }

    #[test]
    fn long_error_text_is_truncated() {
        let long = "x".repeat(MAX_DESCRIPTION + 50);
        let text = render_markdown(&render::error_message(&long));
        assert!(text.contains(&format!("{}\\.\\.\\.", "x".repeat(MAX_DESCRIPTION))));
        assert!(!text.contains(&"x".repeat(MAX_DESCRIPTION + 1)));
    }
}
