//! Repository for the `tos` table.

use folio_core::types::DbId;
use serde_json::json;

use crate::client::QueryClient;
use crate::models::tos::{TosClause, UpdateTosClause};
use crate::DbError;

const COLUMNS: &str = "id, title, content, `order`";

pub struct TosRepo;

impl TosRepo {
    pub async fn list(client: &QueryClient) -> Result<Vec<TosClause>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM tos ORDER BY `order` ASC, id ASC");
        client.fetch_all(&query, &[]).await
    }

    pub async fn find_by_id(client: &QueryClient, id: DbId) -> Result<Option<TosClause>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM tos WHERE id = ?");
        client.fetch_optional(&query, &[json!(id)]).await
    }

    pub async fn insert(client: &QueryClient, clause: &TosClause) -> Result<(), DbError> {
        client
            .execute(
                "INSERT INTO tos (id, title, content, `order`) VALUES (?, ?, ?, ?)",
                &[
                    json!(clause.id),
                    json!(clause.title),
                    json!(clause.content),
                    json!(clause.order),
                ],
            )
            .await
    }

    pub async fn update(
        client: &QueryClient,
        id: DbId,
        patch: UpdateTosClause,
    ) -> Result<(), DbError> {
        let (query, values) = patch.into_update_set().build(id)?;
        client.execute(&query, &values).await
    }

    pub async fn delete(client: &QueryClient, id: DbId) -> Result<(), DbError> {
        client
            .execute("DELETE FROM tos WHERE id = ?", &[json!(id)])
            .await
    }
}
