//! Cookie-based admin extractors.
//!
//! The access level is re-derived on every request by comparing the
//! `password` cookie with the configured secret; nothing is cached.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use folio_core::admin::{Access, ADMIN_COOKIE};
use folio_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// The caller's access level. Never rejects.
///
/// ```ignore
/// async fn page(AdminStatus(access): AdminStatus) -> Json<bool> {
///     Json(access.is_admin())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminStatus(pub Access);

impl FromRequestParts<AppState> for AdminStatus {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let access = state
            .gate
            .access_for(jar.get(ADMIN_COOKIE).map(|c| c.value()));
        Ok(AdminStatus(access))
    }
}

/// Requires a valid admin cookie. Rejects with 401 Unauthorized otherwise.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AdminStatus(access) = AdminStatus::from_request_parts(parts, state).await?;
        if !access.is_admin() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Admin password required".into(),
            )));
        }
        Ok(RequireAdmin)
    }
}
