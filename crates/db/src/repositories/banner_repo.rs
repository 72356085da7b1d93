//! Repository for the `banner` table.

use folio_core::types::DbId;
use serde_json::json;

use crate::client::QueryClient;
use crate::models::banner::{BannerImage, UpdateBanner};
use crate::DbError;

const COLUMNS: &str = "id, image";

/// Provides data access for banner images.
pub struct BannerRepo;

impl BannerRepo {
    /// The current banner: the most recently inserted row, if any.
    pub async fn current(client: &QueryClient) -> Result<Option<BannerImage>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM banner ORDER BY id DESC LIMIT 1");
        client.fetch_optional(&query, &[]).await
    }

    /// Every stored banner, newest first.
    pub async fn list(client: &QueryClient) -> Result<Vec<BannerImage>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM banner ORDER BY id DESC");
        client.fetch_all(&query, &[]).await
    }

    pub async fn find_by_id(
        client: &QueryClient,
        id: DbId,
    ) -> Result<Option<BannerImage>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM banner WHERE id = ?");
        client.fetch_optional(&query, &[json!(id)]).await
    }

    pub async fn insert(client: &QueryClient, banner: &BannerImage) -> Result<(), DbError> {
        client
            .execute(
                "INSERT INTO banner (id, image) VALUES (?, ?)",
                &[json!(banner.id), json!(banner.image)],
            )
            .await
    }

    pub async fn update(
        client: &QueryClient,
        id: DbId,
        patch: UpdateBanner,
    ) -> Result<(), DbError> {
        let (query, values) = patch.into_update_set().build(id)?;
        client.execute(&query, &values).await
    }

    pub async fn delete(client: &QueryClient, id: DbId) -> Result<(), DbError> {
        client
            .execute("DELETE FROM banner WHERE id = ?", &[json!(id)])
            .await
    }
}
