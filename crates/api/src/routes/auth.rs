use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Admin gate routes.
///
/// ```text
/// POST /test-password  -> test_password
/// POST /logout         -> logout
/// GET  /session        -> session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/test-password", post(auth::test_password))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::session))
}
