//! Public contact form relay.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::commission::CommissionRequest;
use folio_core::cooldown::UNKNOWN_CLIENT;
use folio_core::error::CoreError;

use crate::response::Outcome;
use crate::state::AppState;

const SEND_FAILED: &str = "Failed to send commission request";
const NOT_CONFIGURED: &str = "WEBHOOK_URL or ARTIST_ID is not configured";
const INVALID_BODY: &str = "Invalid commission request";

/// Cooldown key for a request: the first `x-forwarded-for` entry.
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}

/// POST /api/send-commission
///
/// The cooldown is consumed before the body, configuration and delivery are
/// checked, so a failed send still blocks the client for the full window.
/// Every answer is an [`Outcome`], including for bodies that are not JSON.
pub async fn send_commission(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CommissionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let key = client_key(&headers);

    if let Err(CoreError::RateLimited { retry_after_secs }) = state.cooldown.acquire(&key).await {
        tracing::info!(client = %key, retry_after_secs, "Commission request throttled");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(Outcome::failed(format!(
                "Please wait {retry_after_secs} seconds before trying again."
            ))),
        );
    }

    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::warn!(client = %key, error = %rejection, "Unreadable commission request");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Outcome::failed(INVALID_BODY)),
            );
        }
    };

    let Some(config) = state.config.webhook.as_ref() else {
        tracing::error!("Commission webhook is not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Outcome::failed(NOT_CONFIGURED)),
        );
    };

    match state.webhook.send_commission(config, &input).await {
        Ok(()) => {
            tracing::info!(client = %key, "Commission request relayed");
            (StatusCode::OK, Json(Outcome::ok()))
        }
        Err(e) => {
            tracing::error!(client = %key, error = %e, "Commission webhook failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Outcome::failed(SEND_FAILED)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn key_is_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("1.2.3.4, 10.0.0.1"),
        );
        assert_eq!(client_key(&headers), "1.2.3.4");
    }

    #[test]
    fn missing_header_is_unknown() {
        assert_eq!(client_key(&HeaderMap::new()), "unknown");
    }
}
