//! Data access for the portfolio tables.
//!
//! The store is a remote SQL proxy reached over HTTP: [`QueryClient`] ships
//! statement text plus positional values, and the repositories in
//! [`repositories`] build those statements for each table.

pub mod client;
pub mod models;
pub mod repositories;
pub mod statement;

pub use client::QueryClient;

/// Errors from the data access layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The HTTP request to the query endpoint failed (network, DNS, TLS).
    #[error("Query request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The query endpoint answered with a non-2xx status.
    #[error("Query endpoint error ({status}): {body}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Raw response body as returned by the proxy.
        body: String,
    },

    /// The response rows did not match the expected shape.
    #[error("Failed to decode query result: {0}")]
    Decode(#[from] serde_json::Error),

    /// A partial update carried no fields.
    #[error("Update for {table} carries no fields")]
    EmptyUpdate { table: &'static str },
}
