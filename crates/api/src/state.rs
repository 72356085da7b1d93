use std::sync::Arc;

use folio_core::admin::AdminGate;
use folio_core::cooldown::CooldownLimiter;
use folio_db::QueryClient;
use folio_events::WebhookDelivery;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for the remote SQL proxy.
    pub db: QueryClient,
    pub config: Arc<ServerConfig>,
    pub gate: Arc<AdminGate>,
    /// Contact-form cooldown, one entry per client key.
    pub cooldown: Arc<CooldownLimiter>,
    pub webhook: Arc<WebhookDelivery>,
}

impl AppState {
    /// Build the state the server runs with from its configuration.
    pub fn from_config(config: ServerConfig) -> Self {
        Self {
            db: QueryClient::new(config.query_api_url.clone()),
            gate: Arc::new(AdminGate::new(config.admin_password.clone())),
            cooldown: Arc::new(CooldownLimiter::new(config.commission_cooldown())),
            webhook: Arc::new(WebhookDelivery::new()),
            config: Arc::new(config),
        }
    }
}
