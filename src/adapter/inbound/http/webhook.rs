//! `POST /webhook` handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use super::AppState;

/// Header carrying the shared secret. Takes precedence over the query parameter.
pub const SECRET_HEADER: &str = "x-webhook-secret";
/// Query parameter carrying the shared secret.
pub const SECRET_QUERY: &str = "secret";

/// Check the secret, parse the body and dispatch every record.
///
/// The body is taken as raw bytes so unauthorized calls are rejected
/// before any parsing. The query string is read raw so a malformed or
/// repeated parameter never rejects the call ahead of the secret check.
pub(super) async fn webhook_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Some(expected) = state.secret.as_deref() {
        let from_header = headers
            .get(SECRET_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        let from_query = query_secret(query.as_deref());
        let header_present = from_header.is_some();
        let query_present = from_query.is_some();

        if !from_header
            .or(from_query)
            .is_some_and(|p| secrets_match(&p, expected))
        {
            warn!(
                header = header_present,
                query = query_present,
                "Unauthorized webhook request"
            );
            return error_response(StatusCode::UNAUTHORIZED, "Unauthorized");
        }
    }

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, bytes = body.len(), "Rejected webhook with invalid JSON");
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON payload");
        }
    };

    info!(bytes = body.len(), "Received webhook");

    match state.dispatcher.dispatch(payload).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Webhook processed",
                "received": summary.received,
                "notified": summary.notified,
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Error processing webhook");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// First non-empty `secret` value in a raw query string.
fn query_secret(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, value)| key == SECRET_QUERY && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Compare secrets without short-circuiting on the first differing byte.
fn secrets_match(provided: &str, expected: &str) -> bool {
    let (a, b) = (provided.as_bytes(), expected.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_secrets() {
        assert!(secrets_match("hunter2", "hunter2"));
        assert!(secrets_match("", ""));
    }

    #[test]
    fn query_secret_takes_first_value() {
        assert_eq!(
            query_secret(Some("secret=a&secret=b")).as_deref(),
            Some("a")
        );
        assert_eq!(
            query_secret(Some("x=1&secret=hunter%32")).as_deref(),
            Some("hunter2")
        );
    }

    #[test]
    fn query_secret_ignores_missing_and_empty_values() {
        assert_eq!(query_secret(None), None);
        assert_eq!(query_secret(Some("")), None);
        assert_eq!(query_secret(Some("secret=")), None);
        assert_eq!(query_secret(Some("secret=&secret=s")).as_deref(), Some("s"));
        assert_eq!(query_secret(Some("%%%&&==")), None);
    }

    #[test]
    fn mismatched_secrets() {
        assert!(!secrets_match("hunter3", "hunter2"));
        assert!(!secrets_match("hunter", "hunter2"));
        assert!(!secrets_match("hunter22", "hunter2"));
    }
}
