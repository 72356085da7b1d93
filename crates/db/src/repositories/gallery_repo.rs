//! Repository for the `gallery` table.

use folio_core::types::DbId;
use serde_json::json;

use crate::client::QueryClient;
use crate::models::gallery::{GalleryArtwork, UpdateArtwork};
use crate::DbError;

/// Column list for `gallery` queries.
const COLUMNS: &str = "id, image, type, client, `order`";

/// Provides data access for gallery artworks.
pub struct GalleryRepo;

impl GalleryRepo {
    /// All artworks by ascending display order.
    pub async fn list(client: &QueryClient) -> Result<Vec<GalleryArtwork>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM gallery ORDER BY `order` ASC, id ASC");
        client.fetch_all(&query, &[]).await
    }

    pub async fn find_by_id(
        client: &QueryClient,
        id: DbId,
    ) -> Result<Option<GalleryArtwork>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM gallery WHERE id = ?");
        client.fetch_optional(&query, &[json!(id)]).await
    }

    pub async fn insert(client: &QueryClient, artwork: &GalleryArtwork) -> Result<(), DbError> {
        client
            .execute(
                "INSERT INTO gallery (id, image, type, client, `order`) VALUES (?, ?, ?, ?, ?)",
                &[
                    json!(artwork.id),
                    json!(artwork.image),
                    json!(artwork.kind),
                    json!(artwork.client),
                    json!(artwork.order),
                ],
            )
            .await
    }

    pub async fn update(
        client: &QueryClient,
        id: DbId,
        patch: UpdateArtwork,
    ) -> Result<(), DbError> {
        let (query, values) = patch.into_update_set().build(id)?;
        client.execute(&query, &values).await
    }

    pub async fn delete(client: &QueryClient, id: DbId) -> Result<(), DbError> {
        client
            .execute("DELETE FROM gallery WHERE id = ?", &[json!(id)])
            .await
    }
}
