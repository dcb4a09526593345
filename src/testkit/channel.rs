//! Chat channel doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ChatMessage;
use crate::error::DeliveryError;
use crate::port::ChatChannel;

/// Thread-safe message collector for notification assertions in tests.
///
/// Optionally fails every post after the first `fail_after` successes, or
/// every post whose title equals `reject_title`.
#[derive(Clone, Default)]
pub struct RecordingChannel {
    messages: Arc<Mutex<Vec<ChatMessage>>>,
    attempts: Arc<AtomicUsize>,
    fail_after: Option<usize>,
    reject_title: Option<String>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel that accepts `successes` posts, then rejects every later one.
    pub fn failing_after(successes: usize) -> Self {
        Self {
            fail_after: Some(successes),
            ..Self::default()
        }
    }

    /// A channel that rejects only messages with the given title.
    pub fn rejecting_title(title: &str) -> Self {
        Self {
            reject_title: Some(title.to_string()),
            ..Self::default()
        }
    }

    /// A channel that rejects every post.
    pub fn failing() -> Self {
        Self::failing_after(0)
    }

    /// Messages delivered so far, in delivery order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().expect("lock channel messages").clone()
    }

    /// Titles of delivered messages, in delivery order.
    pub fn titles(&self) -> Vec<String> {
        self.messages().into_iter().map(|m| m.title).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock channel messages").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `post` calls, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatChannel for RecordingChannel {
    fn name(&self) -> &str {
        "recording"
    }

    async fn post(&self, message: &ChatMessage) -> Result<(), DeliveryError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        let rejected = self.fail_after.is_some_and(|limit| attempt >= limit)
            || self.reject_title.as_deref() == Some(message.title.as_str());
        if rejected {
            return Err(DeliveryError::ChannelUnavailable {
                channel: "recording".to_string(),
                reason: "simulated outage".to_string(),
            });
        }
        self.messages
            .lock()
            .expect("lock channel messages")
            .push(message.clone());
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.fail_after != Some(0)
    }
}
