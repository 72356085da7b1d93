//! Handlers for terms-of-service clauses.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::ids::next_id;
use folio_core::ordering::next_order;
use folio_core::types::DbId;
use folio_db::models::tos::{CreateTosClause, UpdateTosClause};
use folio_db::repositories::TosRepo;
use folio_editor::TosStore;

use super::section::{self, ReorderRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/tos
pub async fn list_clauses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let clauses = TosRepo::list(&state.db).await?;
    Ok(Json(DataResponse { data: clauses }))
}

/// GET /api/tos/{id}
pub async fn get_clause(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let clause = TosRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TosClause",
            id,
        }))?;
    Ok(Json(DataResponse { data: clause }))
}

/// POST /api/tos
///
/// Without an explicit `order` the clause goes after the current last one.
pub async fn create_clause(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTosClause>,
) -> AppResult<impl IntoResponse> {
    let existing = TosRepo::list(&state.db).await?;
    let clause = input.into_entity(next_id(), next_order(existing.len()));
    TosRepo::insert(&state.db, &clause).await?;

    tracing::info!(clause_id = clause.id, order = clause.order, "ToS clause created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: clause })))
}

/// POST /api/tos/placeholder
pub async fn add_placeholder_clause(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    section::add_placeholder(TosStore::new(state.db.clone())).await
}

/// PUT /api/tos/{id}
///
/// Partial update; only fields present in the body are written.
pub async fn update_clause(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTosClause>,
) -> AppResult<impl IntoResponse> {
    TosRepo::update(&state.db, id, input).await?;
    let clause = TosRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TosClause",
            id,
        }))?;

    tracing::info!(clause_id = id, "ToS clause updated");

    Ok(Json(DataResponse { data: clause }))
}

/// DELETE /api/tos/{id}
pub async fn delete_clause(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    TosRepo::delete(&state.db, id).await?;
    tracing::info!(clause_id = id, "ToS clause deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/tos/order
pub async fn reorder_clauses(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    section::reorder(TosStore::new(state.db.clone()), input).await
}
