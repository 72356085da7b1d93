//! Editor-backed operations shared by the ordered sections.

use axum::http::StatusCode;
use axum::Json;
use folio_core::types::DbId;
use folio_editor::{SectionEditor, SectionStore};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;

/// Move the item at zero-based position `from` to `to`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

/// The section after a reorder and which order updates reached the store.
#[derive(Debug, Serialize)]
pub struct ReorderResponse<T: Serialize> {
    pub items: Vec<T>,
    pub persisted: Vec<DbId>,
    pub failed: Vec<DbId>,
}

/// Load the section, move one item and persist every new order.
///
/// Failed order updates do not fail the request; they are listed in
/// `failed` and the remaining items keep their new order.
pub async fn reorder<S>(
    store: S,
    input: ReorderRequest,
) -> AppResult<Json<DataResponse<ReorderResponse<S::Item>>>>
where
    S: SectionStore,
    S::Item: Serialize,
{
    let mut editor = SectionEditor::mount(store).await?;
    let outcome = editor.reorder(input.from, input.to).await?;

    Ok(Json(DataResponse {
        data: ReorderResponse {
            items: editor.values().cloned().collect(),
            persisted: outcome.persisted,
            failed: outcome.failed,
        },
    }))
}

/// Append a placeholder item after the last one.
pub async fn add_placeholder<S>(
    store: S,
) -> AppResult<(StatusCode, Json<DataResponse<S::Item>>)>
where
    S: SectionStore,
    S::Item: Serialize,
{
    let mut editor = SectionEditor::mount(store).await?;
    let item = editor.add_new().await?.clone();
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}
