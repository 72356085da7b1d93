//! Public page data.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::pagination::GalleryFeed;
use folio_db::models::banner::BannerImage;
use folio_db::models::gallery::GalleryArtwork;
use folio_db::models::price::PriceOffering;
use folio_db::models::tos::TosClause;
use folio_db::repositories::{BannerRepo, GalleryRepo, PriceRepo, TosRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::admin::AdminStatus;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the single-page site renders.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub is_admin: bool,
    pub banner: BannerImage,
    pub prices: Vec<PriceOffering>,
    pub gallery: Vec<GalleryArtwork>,
    pub tos: Vec<TosClause>,
}

/// GET /api/home
///
/// The four sections are fetched concurrently; any failure fails the page.
pub async fn get_home(
    AdminStatus(access): AdminStatus,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let (banner, prices, gallery, tos) = tokio::try_join!(
        BannerRepo::current(&state.db),
        PriceRepo::list(&state.db),
        GalleryRepo::list(&state.db),
        TosRepo::list(&state.db),
    )?;

    Ok(Json(DataResponse {
        data: HomePage {
            is_admin: access.is_admin(),
            banner: banner.unwrap_or_else(BannerImage::fallback),
            prices,
            gallery,
            tos,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct GalleryPageParams {
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GalleryPage {
    pub items: Vec<GalleryArtwork>,
    pub page: usize,
    pub has_more: bool,
    pub total: usize,
}

/// GET /api/gallery?page=N
///
/// The first `page * 12` artworks. Pages start at 1; lower values are
/// treated as 1.
pub async fn get_gallery_page(
    State(state): State<AppState>,
    Query(params): Query<GalleryPageParams>,
) -> AppResult<impl IntoResponse> {
    let artworks = GalleryRepo::list(&state.db).await?;
    let feed = GalleryFeed::at_page(params.page.unwrap_or(1));
    let total = artworks.len();

    Ok(Json(DataResponse {
        data: GalleryPage {
            items: feed.visible(&artworks).to_vec(),
            page: feed.page(),
            has_more: feed.has_more(total),
            total,
        },
    }))
}
