//! In-process webhook server bound to an ephemeral port.

use std::sync::Arc;

use mintwatch::adapter::inbound::http::{self, AppState};
use mintwatch::application::{Notifier, WebhookDispatcher};
use mintwatch::testkit::channel::RecordingChannel;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running server and the channel it posts to.
pub struct TestServer {
    pub base_url: String,
    pub channel: RecordingChannel,
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server without a webhook secret.
    pub async fn start(channel: RecordingChannel) -> Self {
        Self::start_with_secret(channel, None).await
    }

    /// Start a server requiring `secret` on `/webhook`.
    pub async fn start_with_secret(channel: RecordingChannel, secret: Option<&str>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let state = Arc::new(AppState {
            dispatcher: WebhookDispatcher::new(Notifier::new(Arc::new(channel.clone()))),
            secret: secret.map(str::to_owned),
        });

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async move {
                let _ = rx.await;
            };
            http::serve(listener, state, shutdown).await.expect("serve");
        });

        Self {
            base_url: format!("http://{addr}"),
            channel,
            client: reqwest::Client::new(),
            shutdown: Some(tx),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST a JSON body to `/webhook`.
    pub async fn post_webhook(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/webhook"))
            .json(body)
            .send()
            .await
            .expect("webhook request")
    }

    /// Stop the server and wait for it to drain.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = (&mut self.handle).await;
    }
}
