pub mod auth;
pub mod banner;
pub mod commission;
pub mod gallery;
pub mod health;
pub mod home;
pub mod prices;
pub mod tos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /home                                  page data (public)
/// /gallery?page=N                        paginated gallery feed (public)
///
/// /prices                                list, create
/// /prices/placeholder                    add placeholder (POST)
/// /prices/order                          reorder (PUT)
/// /prices/{id}                           get, update, delete
///
/// /gallery-items                         list, create
/// /gallery-items/placeholder             add placeholder (POST)
/// /gallery-items/order                   reorder (PUT)
/// /gallery-items/{id}                    get, update, delete
///
/// /tos                                   list, create
/// /tos/placeholder                       add placeholder (POST)
/// /tos/order                             reorder (PUT)
/// /tos/{id}                              get, update, delete
///
/// /banner                                current, replace
/// /banner/history                        every stored banner (GET)
/// /banner/{id}                           update, delete
///
/// /test-password                         check admin password (POST)
/// /logout                                clear admin cookie (POST)
/// /session                               current access level (GET)
///
/// /send-commission                       contact form relay (POST)
/// ```
///
/// Every mutating route requires the admin cookie.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .nest("/prices", prices::router())
        .nest("/gallery-items", gallery::router())
        .nest("/tos", tos::router())
        .nest("/banner", banner::router())
        .merge(auth::router())
        .merge(commission::router())
}
