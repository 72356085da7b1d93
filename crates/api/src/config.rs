use std::time::Duration;

use axum::http::HeaderValue;
use folio_core::cooldown::DEFAULT_COOLDOWN;
use folio_events::WebhookConfig;

/// Startup configuration problems. These abort the process before the
/// listener is bound.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the remote SQL proxy.
    pub query_api_url: String,
    /// Shared admin secret. `None` disables the editor.
    pub admin_password: Option<String>,
    /// Commission webhook target. `None` makes the contact form answer 500.
    pub webhook: Option<WebhookConfig>,
    /// Per-client cooldown for the contact form (default: `60`).
    pub commission_cooldown_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `3000`                  |
    /// | `CORS_ORIGINS`             | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `QUERY_API_URL`            | required                |
    /// | `ADMIN_PASSWORD`           | unset                   |
    /// | `WEBHOOK_URL`, `ARTIST_ID` | unset                   |
    /// | `COMMISSION_COOLDOWN_SECS` | `60`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 3000u16)?;

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|o| {
                o.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: o.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30u64)?;

        let query_api_url = std::env::var("QUERY_API_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("QUERY_API_URL"))?;

        let admin_password = std::env::var("ADMIN_PASSWORD").ok();

        let commission_cooldown_secs =
            parse_var("COMMISSION_COOLDOWN_SECS", DEFAULT_COOLDOWN.as_secs())?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            query_api_url,
            admin_password,
            webhook: WebhookConfig::from_env(),
            commission_cooldown_secs,
        })
    }

    pub fn commission_cooldown(&self) -> Duration {
        Duration::from_secs(self.commission_cooldown_secs)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}
