//! Admin password check and cookie handling.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use folio_core::admin::{ADMIN_COOKIE, INCORRECT_PASSWORD};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::middleware::admin::AdminStatus;
use crate::response::Outcome;
use crate::state::AppState;

/// Only a JSON string can match; any other value is a wrong password.
#[derive(Deserialize)]
pub struct PasswordRequest {
    #[serde(default)]
    pub password: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub is_admin: bool,
}

/// POST /api/test-password
///
/// On a match the password itself is stored in the `password` cookie and
/// sent back on every later request. A mismatch, or a body that cannot be
/// read, is still a 200.
pub async fn test_password(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<PasswordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let candidate = match body {
        Ok(Json(PasswordRequest {
            password: Some(Value::String(password)),
        })) => Some(password),
        _ => None,
    };

    let Some(password) = candidate.filter(|p| state.gate.verify(p)) else {
        tracing::info!(enabled = state.gate.is_enabled(), "Admin password rejected");
        return (jar, Json(Outcome::failed(INCORRECT_PASSWORD)));
    };

    tracing::info!("Admin password accepted");
    let cookie = Cookie::build((ADMIN_COOKIE, password))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), Json(Outcome::ok()))
}

/// POST /api/logout
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(ADMIN_COOKIE).path("/"));
    (jar, Json(Outcome::ok()))
}

/// GET /api/session
pub async fn session(AdminStatus(access): AdminStatus) -> Json<SessionStatus> {
    Json(SessionStatus {
        is_admin: access.is_admin(),
    })
}
