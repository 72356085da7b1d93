//! HTTP client for the remote SQL proxy.
//!
//! Every call is a single `POST {base}/api/query` with a JSON body
//! `{"sql": ..., "values": [...]}`. The proxy answers with an array of
//! records for `SELECT` statements and an implementation-defined object for
//! everything else. There is no retry; failures propagate to the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::DbError;

/// Request body sent to the proxy.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    sql: &'a str,
    values: &'a [Value],
}

/// Client for one remote SQL proxy.
#[derive(Debug, Clone)]
pub struct QueryClient {
    client: reqwest::Client,
    api_url: String,
}

impl QueryClient {
    /// Create a client for the proxy at `api_url`, e.g. `http://host:8080`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Run a statement and return the raw decoded JSON result.
    pub async fn query(&self, sql: &str, values: &[Value]) -> Result<Value, DbError> {
        tracing::debug!(sql, params = values.len(), "Executing remote query");

        let response = self
            .client
            .post(format!("{}/api/query", self.api_url))
            .json(&QueryRequest { sql, values })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), sql, "Remote query failed");
            return Err(DbError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }

    /// Run a `SELECT` and decode each returned record into `T`.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        sql: &str,
        values: &[Value],
    ) -> Result<Vec<T>, DbError> {
        let result = self.query(sql, values).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Run a `SELECT` expected to return at most one record.
    pub async fn fetch_optional<T: DeserializeOwned>(
        &self,
        sql: &str,
        values: &[Value],
    ) -> Result<Option<T>, DbError> {
        let mut rows = self.fetch_all::<T>(sql, values).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.swap_remove(0)))
        }
    }

    /// Run a statement whose result is not needed.
    pub async fn execute(&self, sql: &str, values: &[Value]) -> Result<(), DbError> {
        self.query(sql, values).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = QueryClient::new("http://localhost:8080/");
        assert_eq!(client.api_url(), "http://localhost:8080");
    }

    #[test]
    fn request_body_shape() {
        let values = [Value::from(1), Value::from("x")];
        let body = serde_json::to_value(QueryRequest {
            sql: "SELECT 1",
            values: &values,
        })
        .unwrap();
        assert_eq!(body["sql"], "SELECT 1");
        assert_eq!(body["values"], serde_json::json!([1, "x"]));
    }
}
