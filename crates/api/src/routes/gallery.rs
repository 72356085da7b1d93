use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Gallery artwork routes mounted at `/gallery-items`.
///
/// ```text
/// GET    /              -> list_artworks
/// POST   /              -> create_artwork
/// POST   /placeholder   -> add_placeholder_artwork
/// PUT    /order         -> reorder_artworks
/// GET    /{id}          -> get_artwork
/// PUT    /{id}          -> update_artwork
/// DELETE /{id}          -> delete_artwork
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list_artworks).post(gallery::create_artwork))
        .route("/placeholder", post(gallery::add_placeholder_artwork))
        .route("/order", put(gallery::reorder_artworks))
        .route(
            "/{id}",
            get(gallery::get_artwork)
                .put(gallery::update_artwork)
                .delete(gallery::delete_artwork),
        )
}
