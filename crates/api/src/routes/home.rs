use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// Public page routes.
///
/// ```text
/// GET /home     -> get_home
/// GET /gallery  -> get_gallery_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(home::get_home))
        .route("/gallery", get(home::get_gallery_page))
}
