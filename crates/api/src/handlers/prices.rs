//! Handlers for price cards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::ids::next_id;
use folio_core::ordering::next_order;
use folio_core::types::DbId;
use folio_db::models::price::{CreatePrice, UpdatePrice};
use folio_db::repositories::PriceRepo;
use folio_editor::PriceStore;

use super::section::{self, ReorderRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/prices
pub async fn list_prices(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let prices = PriceRepo::list(&state.db).await?;
    Ok(Json(DataResponse { data: prices }))
}

/// GET /api/prices/{id}
pub async fn get_price(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let price = PriceRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PriceOffering",
            id,
        }))?;
    Ok(Json(DataResponse { data: price }))
}

/// POST /api/prices
///
/// Without an explicit `order` the card goes after the current last one.
pub async fn create_price(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePrice>,
) -> AppResult<impl IntoResponse> {
    let existing = PriceRepo::list(&state.db).await?;
    let price = input.into_entity(next_id(), next_order(existing.len()));
    PriceRepo::insert(&state.db, &price).await?;

    tracing::info!(price_id = price.id, order = price.order, "Price card created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: price })))
}

/// POST /api/prices/placeholder
pub async fn add_placeholder_price(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    section::add_placeholder(PriceStore::new(state.db.clone())).await
}

/// PUT /api/prices/{id}
///
/// Partial update; only fields present in the body are written.
pub async fn update_price(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrice>,
) -> AppResult<impl IntoResponse> {
    PriceRepo::update(&state.db, id, input).await?;
    let price = PriceRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PriceOffering",
            id,
        }))?;

    tracing::info!(price_id = id, "Price card updated");

    Ok(Json(DataResponse { data: price }))
}

/// DELETE /api/prices/{id}
pub async fn delete_price(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    PriceRepo::delete(&state.db, id).await?;
    tracing::info!(price_id = id, "Price card deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/prices/order
pub async fn reorder_prices(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    section::reorder(PriceStore::new(state.db.clone()), input).await
}
