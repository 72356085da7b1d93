//! Handlers for gallery artworks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::ids::next_id;
use folio_core::ordering::next_order;
use folio_core::types::DbId;
use folio_db::models::gallery::{CreateArtwork, UpdateArtwork};
use folio_db::repositories::GalleryRepo;
use folio_editor::GalleryStore;

use super::section::{self, ReorderRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/gallery-items
pub async fn list_artworks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let artworks = GalleryRepo::list(&state.db).await?;
    Ok(Json(DataResponse { data: artworks }))
}

/// GET /api/gallery-items/{id}
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let artwork = GalleryRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryArtwork",
            id,
        }))?;
    Ok(Json(DataResponse { data: artwork }))
}

/// POST /api/gallery-items
///
/// Without an explicit `order` the artwork goes after the current last one.
pub async fn create_artwork(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateArtwork>,
) -> AppResult<impl IntoResponse> {
    let existing = GalleryRepo::list(&state.db).await?;
    let artwork = input.into_entity(next_id(), next_order(existing.len()));
    GalleryRepo::insert(&state.db, &artwork).await?;

    tracing::info!(artwork_id = artwork.id, order = artwork.order, "Artwork created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: artwork })))
}

/// POST /api/gallery-items/placeholder
pub async fn add_placeholder_artwork(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    section::add_placeholder(GalleryStore::new(state.db.clone())).await
}

/// PUT /api/gallery-items/{id}
///
/// Partial update; only fields present in the body are written.
pub async fn update_artwork(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtwork>,
) -> AppResult<impl IntoResponse> {
    GalleryRepo::update(&state.db, id, input).await?;
    let artwork = GalleryRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryArtwork",
            id,
        }))?;

    tracing::info!(artwork_id = id, "Artwork updated");

    Ok(Json(DataResponse { data: artwork }))
}

/// DELETE /api/gallery-items/{id}
pub async fn delete_artwork(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    GalleryRepo::delete(&state.db, id).await?;
    tracing::info!(artwork_id = id, "Artwork deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/gallery-items/order
pub async fn reorder_artworks(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    section::reorder(GalleryStore::new(state.db.clone()), input).await
}
