use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::tos;
use crate::state::AppState;

/// Terms-of-service routes mounted at `/tos`.
///
/// ```text
/// GET    /              -> list_clauses
/// POST   /              -> create_clause
/// POST   /placeholder   -> add_placeholder_clause
/// PUT    /order         -> reorder_clauses
/// GET    /{id}          -> get_clause
/// PUT    /{id}          -> update_clause
/// DELETE /{id}          -> delete_clause
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tos::list_clauses).post(tos::create_clause))
        .route("/placeholder", post(tos::add_placeholder_clause))
        .route("/order", put(tos::reorder_clauses))
        .route(
            "/{id}",
            get(tos::get_clause)
                .put(tos::update_clause)
                .delete(tos::delete_clause),
        )
}
