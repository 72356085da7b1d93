//! Webhook delivery for commission requests.
//!
//! [`WebhookDelivery`] formats a [`CommissionRequest`] as a Discord-style
//! message (a mention of the artist, one embed with the request details, no
//! attachments) and POSTs it to the configured URL. A single attempt is made;
//! failures are returned to the caller.

use std::time::Duration;

use folio_core::commission::CommissionRequest;
use serde::Serialize;

/// Accent colour of the commission embed (`#58B9FF`).
pub const EMBED_COLOR: u32 = 5_814_783;

/// HTTP request timeout for a delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Where commission notifications go and whom they mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    /// Discord user id mentioned in the message content.
    pub artist_id: String,
}

impl WebhookConfig {
    /// Load from `WEBHOOK_URL` and `ARTIST_ID`.
    ///
    /// Returns `None` if either is unset or empty; the contact endpoint then
    /// answers with a configuration error.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("WEBHOOK_URL").ok().filter(|v| !v.is_empty())?;
        let artist_id = std::env::var("ARTIST_ID").ok().filter(|v| !v.is_empty())?;
        Some(Self { url, artist_id })
    }
}

// ---------------------------------------------------------------------------
// Message envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage {
    pub content: String,
    pub embeds: Vec<Embed>,
    pub attachments: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl EmbedField {
    fn inline(name: &'static str, value: &str) -> Self {
        Self {
            name,
            value: value.to_string(),
            inline: Some(true),
        }
    }

    fn block(name: &'static str, value: &str) -> Self {
        Self {
            name,
            value: value.to_string(),
            inline: None,
        }
    }
}

/// Build the notification for `request`, substituting placeholders for
/// missing fields.
pub fn commission_message(artist_id: &str, request: &CommissionRequest) -> WebhookMessage {
    WebhookMessage {
        content: format!("New commission for <@{artist_id}>! Details are listed below."),
        embeds: vec![Embed {
            description: request.details_or_placeholder().to_string(),
            color: EMBED_COLOR,
            fields: vec![
                EmbedField::inline("Discord Handle", request.discord_or_placeholder()),
                EmbedField::inline("Email", request.email_or_placeholder()),
                EmbedField::inline("Commission Type", request.commission_type_or_placeholder()),
                EmbedField::block("References", request.references_or_placeholder()),
            ],
        }],
        attachments: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// WebhookDelivery
// ---------------------------------------------------------------------------

/// Delivers commission notifications to a webhook endpoint.
pub struct WebhookDelivery {
    client: reqwest::Client,
}

impl WebhookDelivery {
    /// Create a new delivery service with a pre-configured HTTP client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }

    /// Format and send one commission request.
    pub async fn send_commission(
        &self,
        config: &WebhookConfig,
        request: &CommissionRequest,
    ) -> Result<(), WebhookError> {
        let message = commission_message(&config.artist_id, request);
        self.deliver(&config.url, &message).await
    }

    /// POST `message` once and check the response status.
    pub async fn deliver(&self, url: &str, message: &WebhookMessage) -> Result<(), WebhookError> {
        let response = self.client.post(url).json(message).send().await?;
        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "Webhook rejected delivery");
            return Err(WebhookError::HttpStatus(response.status().as_u16()));
        }
        tracing::info!("Commission webhook delivered");
        Ok(())
    }
}

impl Default for WebhookDelivery {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CommissionRequest {
        CommissionRequest {
            commission_type: Some("Full Body".into()),
            discord: Some("leti#0001".into()),
            email: Some("client@example.com".into()),
            commission_details: Some("A fox in a scarf".into()),
            references: Some("https://example.com/ref.png".into()),
        }
    }

    #[test]
    fn envelope_matches_discord_shape() {
        let message = commission_message("12345", &full_request());
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(
            json["content"],
            "New commission for <@12345>! Details are listed below."
        );
        assert_eq!(json["attachments"], serde_json::json!([]));

        let embed = &json["embeds"][0];
        assert_eq!(embed["description"], "A fox in a scarf");
        assert_eq!(embed["color"], 5814783);

        let fields = embed["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0]["name"], "Discord Handle");
        assert_eq!(fields[0]["value"], "leti#0001");
        assert_eq!(fields[0]["inline"], true);
        assert_eq!(fields[2]["name"], "Commission Type");
        assert_eq!(fields[3]["name"], "References");
        assert!(fields[3].get("inline").is_none());
    }

    #[test]
    fn missing_details_use_placeholder() {
        let message = commission_message("1", &CommissionRequest::default());
        let embed = &message.embeds[0];
        assert_eq!(embed.description, "description not provided");
        assert!(embed.fields.iter().all(|f| f.value == "not provided"));
    }

    #[test]
    fn new_does_not_panic() {
        let _delivery = WebhookDelivery::new();
    }

    #[test]
    fn webhook_error_display_http_status() {
        let err = WebhookError::HttpStatus(404);
        assert_eq!(err.to_string(), "Webhook returned HTTP 404");
    }
}
