//! HTTP API for the mint tracker.
//!
//! Endpoints:
//! - `POST /webhook` - Receive Helius transaction webhooks
//! - `GET /health` - Health check
//! - `GET /` - Service description

mod info;
mod webhook;

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::application::WebhookDispatcher;
use crate::error::Result;

pub use webhook::{SECRET_HEADER, SECRET_QUERY};

/// State shared across handlers.
pub struct AppState {
    pub dispatcher: WebhookDispatcher,
    /// Shared secret required on `/webhook`. `None` accepts every caller.
    pub secret: Option<String>,
}

/// Create the HTTP router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(info::root_handler))
        .route("/health", get(info::health_handler))
        .route("/webhook", post(webhook::webhook_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve the router on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
