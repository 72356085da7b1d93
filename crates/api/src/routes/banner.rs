use axum::routing::{get, put};
use axum::Router;

use crate::handlers::banner;
use crate::state::AppState;

/// Banner routes mounted at `/banner`.
///
/// ```text
/// GET    /          -> get_banner
/// PUT    /          -> replace_banner
/// GET    /history   -> list_banners
/// PUT    /{id}      -> update_banner
/// DELETE /{id}      -> delete_banner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner::get_banner).put(banner::replace_banner))
        .route("/history", get(banner::list_banners))
        .route(
            "/{id}",
            put(banner::update_banner).delete(banner::delete_banner),
        )
}
