//! Webhook dispatch.
//!
//! Unwraps a webhook body into records, normalizes each one in order and
//! notifies for every mint. The first delivery failure stops the batch and
//! is reported back through the same channel on a best-effort basis.

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::error::DeliveryError;

use super::normalize::{normalize, Normalized};
use super::notifier::Notifier;

/// Counts for one dispatched webhook call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchSummary {
    /// Records found in the body.
    pub received: usize,
    /// Mint notifications delivered.
    pub notified: usize,
    /// Records that were not NFT mints.
    pub skipped: usize,
}

/// A webhook body. The provider sends either one record or an array of records.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookBody {
    Single(Value),
    Batch(Vec<Value>),
}

impl WebhookBody {
    /// The records of this body, in input order.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        match self {
            Self::Single(record) => vec![record],
            Self::Batch(records) => records,
        }
    }
}

impl From<Value> for WebhookBody {
    fn from(body: Value) -> Self {
        match body {
            Value::Array(records) => Self::Batch(records),
            record => Self::Single(record),
        }
    }
}

/// Processes webhook bodies against a [`Notifier`].
#[derive(Clone)]
pub struct WebhookDispatcher {
    notifier: Notifier,
}

impl WebhookDispatcher {
    pub fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Normalize and notify every record of `body`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first delivery failure. An error notification is
    /// attempted before returning; its own failure is only logged.
    pub async fn dispatch(
        &self,
        body: impl Into<WebhookBody>,
    ) -> Result<DispatchSummary, DeliveryError> {
        let records = body.into().into_records();
        let mut summary = DispatchSummary {
            received: records.len(),
            ..DispatchSummary::default()
        };

        for record in &records {
            let Normalized::Mint(event) = normalize(record) else {
                summary.skipped += 1;
                continue;
            };

            if let Err(e) = self.notifier.send_mint_notification(&event).await {
                error!(error = %e, notified = summary.notified, "Error handling mint event");
                self.report_failure(&e).await;
                return Err(e);
            }
            summary.notified += 1;
        }

        info!(
            received = summary.received,
            notified = summary.notified,
            skipped = summary.skipped,
            "Webhook dispatched"
        );
        Ok(summary)
    }

    async fn report_failure(&self, failure: &DeliveryError) {
        if let Err(e) = self
            .notifier
            .send_error_notification(&failure.to_string())
            .await
        {
            error!(error = %e, "Could not send error notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::application::render::{ERROR_TITLE, MINT_TITLE};
    use crate::testkit::channel::RecordingChannel;
    use crate::testkit::records;

    fn dispatcher(channel: &RecordingChannel) -> WebhookDispatcher {
        WebhookDispatcher::new(Notifier::new(Arc::new(channel.clone())))
    }

    fn headlines(channel: &RecordingChannel) -> Vec<String> {
        channel
            .messages()
            .into_iter()
            .filter_map(|m| m.headline)
            .collect()
    }

    #[test]
    fn single_object_becomes_one_record() {
        let body = WebhookBody::from(json!({ "type": "NFT_MINT" }));
        assert!(matches!(body, WebhookBody::Single(_)));
        assert_eq!(body.into_records().len(), 1);
    }

    #[test]
    fn arrays_keep_every_record() {
        assert_eq!(WebhookBody::from(json!([{}, {}, {}])).into_records().len(), 3);
        assert!(WebhookBody::from(json!([])).into_records().is_empty());
    }

    #[tokio::test]
    async fn single_record_body_is_dispatched() {
        let channel = RecordingChannel::new();
        let summary = dispatcher(&channel)
            .dispatch(records::enhanced_nft_mint("sig", "Mint"))
            .await
            .unwrap();

        assert_eq!(
            summary,
            DispatchSummary {
                received: 1,
                notified: 1,
                skipped: 0
            }
        );
        assert_eq!(channel.titles(), vec![MINT_TITLE.to_string()]);
    }

    #[tokio::test]
    async fn only_applicable_records_are_notified_in_order() {
        let channel = RecordingChannel::new();
        let body = json!([
            records::token_mint("s1", "First", &[json!(1)]),
            records::unrelated_transfer("s2"),
            records::token_mint("s3", "Fungible", &[json!(5000)]),
            records::raw_transaction("s4", &[("Second", 1.0, 0)]),
            records::token_mint("s5", "Third", &[json!("1")]),
        ]);

        let summary = dispatcher(&channel).dispatch(body).await.unwrap();

        assert_eq!(summary.received, 5);
        assert_eq!(summary.notified, 3);
        assert_eq!(summary.skipped, 2);
        assert_eq!(headlines(&channel), vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn batch_without_mints_succeeds_silently() {
        let channel = RecordingChannel::new();
        let body = json!([records::unrelated_transfer("a"), json!({})]);

        let summary = dispatcher(&channel).dispatch(body).await.unwrap();

        assert_eq!(summary.notified, 0);
        assert_eq!(summary.skipped, 2);
        assert!(channel.is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_stops_batch_and_reports_error() {
        let channel = RecordingChannel::rejecting_title(MINT_TITLE);
        let body = json!([
            records::enhanced_nft_mint("s1", "A"),
            records::enhanced_nft_mint("s2", "B"),
        ]);

        let result = dispatcher(&channel).dispatch(body).await;

        assert!(result.is_err());
        // One failed mint post, then one error notification.
        assert_eq!(channel.attempts(), 2);
        assert_eq!(channel.titles(), vec![ERROR_TITLE.to_string()]);
        assert!(channel.messages()[0].description.contains("simulated outage"));
    }

    #[tokio::test]
    async fn failing_error_notification_still_returns_original_error() {
        let channel = RecordingChannel::failing_after(1);
        let body = json!([
            records::enhanced_nft_mint("s1", "A"),
            records::enhanced_nft_mint("s2", "B"),
            records::enhanced_nft_mint("s3", "C"),
        ]);

        let result = dispatcher(&channel).dispatch(body).await;

        assert!(matches!(
            result,
            Err(DeliveryError::ChannelUnavailable { .. })
        ));
        // A delivered, B failed, error notification failed, C never tried.
        assert_eq!(channel.attempts(), 3);
        assert_eq!(channel.len(), 1);
    }
}
