//! Repository for the `prices` table.

use folio_core::types::DbId;
use serde_json::json;

use crate::client::QueryClient;
use crate::models::price::{PriceOffering, UpdatePrice};
use crate::DbError;

/// Column list for `prices` queries.
const COLUMNS: &str = "id, image, type, price, description, `order`";

/// Provides data access for price cards.
pub struct PriceRepo;

impl PriceRepo {
    /// All price cards by ascending display order.
    pub async fn list(client: &QueryClient) -> Result<Vec<PriceOffering>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM prices ORDER BY `order` ASC, id ASC");
        client.fetch_all(&query, &[]).await
    }

    pub async fn find_by_id(
        client: &QueryClient,
        id: DbId,
    ) -> Result<Option<PriceOffering>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM prices WHERE id = ?");
        client.fetch_optional(&query, &[json!(id)]).await
    }

    /// Insert a fully populated card, id included.
    pub async fn insert(client: &QueryClient, price: &PriceOffering) -> Result<(), DbError> {
        client
            .execute(
                "INSERT INTO prices (id, image, type, price, description, `order`) \
                 VALUES (?, ?, ?, ?, ?, ?)",
                &[
                    json!(price.id),
                    json!(price.image),
                    json!(price.kind),
                    json!(price.price),
                    json!(price.description),
                    json!(price.order),
                ],
            )
            .await
    }

    /// Write the fields present in `patch`. Unknown ids are a no-op.
    pub async fn update(
        client: &QueryClient,
        id: DbId,
        patch: UpdatePrice,
    ) -> Result<(), DbError> {
        let (query, values) = patch.into_update_set().build(id)?;
        client.execute(&query, &values).await
    }

    /// Delete a card. Unknown ids are a no-op.
    pub async fn delete(client: &QueryClient, id: DbId) -> Result<(), DbError> {
        client
            .execute("DELETE FROM prices WHERE id = ?", &[json!(id)])
            .await
    }
}
