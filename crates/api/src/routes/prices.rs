use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::prices;
use crate::state::AppState;

/// Price card routes mounted at `/prices`.
///
/// ```text
/// GET    /              -> list_prices
/// POST   /              -> create_price
/// POST   /placeholder   -> add_placeholder_price
/// PUT    /order         -> reorder_prices
/// GET    /{id}          -> get_price
/// PUT    /{id}          -> update_price
/// DELETE /{id}          -> delete_price
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prices::list_prices).post(prices::create_price))
        .route("/placeholder", post(prices::add_placeholder_price))
        .route("/order", put(prices::reorder_prices))
        .route(
            "/{id}",
            get(prices::get_price)
                .put(prices::update_price)
                .delete(prices::delete_price),
        )
}
