use axum::routing::post;
use axum::Router;

use crate::handlers::commission;
use crate::state::AppState;

/// Contact form route.
///
/// ```text
/// POST /send-commission  -> send_commission
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/send-commission", post(commission::send_commission))
}
