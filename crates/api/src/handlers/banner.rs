//! Handlers for the page banner.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::banner::{BannerImage, ReplaceBanner, UpdateBanner};
use folio_db::repositories::BannerRepo;
use folio_editor::BannerEditor;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/banner
///
/// The newest banner row, or the placeholder image while none exists.
pub async fn get_banner(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let banner = BannerRepo::current(&state.db)
        .await?
        .unwrap_or_else(BannerImage::fallback);
    Ok(Json(DataResponse { data: banner }))
}

/// PUT /api/banner
///
/// Stores the image as a new row, which becomes the current banner.
/// Earlier rows are kept.
pub async fn replace_banner(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ReplaceBanner>,
) -> AppResult<impl IntoResponse> {
    let mut editor = BannerEditor::mount(state.db.clone()).await?;
    editor.begin_edit();
    editor.set_image(input.image)?;
    let banner = editor.save().await?.clone();

    Ok(Json(DataResponse { data: banner }))
}

/// GET /api/banner/history
pub async fn list_banners(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let banners = BannerRepo::list(&state.db).await?;
    Ok(Json(DataResponse { data: banners }))
}

/// PUT /api/banner/{id}
///
/// Edit a stored row in place without changing which banner is current.
pub async fn update_banner(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBanner>,
) -> AppResult<impl IntoResponse> {
    BannerRepo::update(&state.db, id, input).await?;
    let banner = BannerRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BannerImage",
            id,
        }))?;

    tracing::info!(banner_id = id, "Banner updated");

    Ok(Json(DataResponse { data: banner }))
}

/// DELETE /api/banner/{id}
pub async fn delete_banner(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    BannerRepo::delete(&state.db, id).await?;
    tracing::info!(banner_id = id, "Banner deleted");
    Ok(StatusCode::NO_CONTENT)
}
