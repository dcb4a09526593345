//! Liveness and service description endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use super::AppState;

/// Service name reported by `GET /`.
const SERVICE_NAME: &str = "NFT Mint Tracker Bot";

/// `GET /health`
pub(super) async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let telegram = if state.dispatcher.notifier().is_connected() {
        "connected"
    } else {
        "disconnected"
    };

    Json(json!({
        "status": "ok",
        "telegram": telegram,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// `GET /`
pub(super) async fn root_handler() -> Json<Value> {
    Json(json!({
        "name": SERVICE_NAME,
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "webhook": "/webhook",
            "health": "/health",
        },
    }))
}
