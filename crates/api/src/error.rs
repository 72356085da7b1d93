use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_db::DbError;
use folio_editor::EditorError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, data and editor errors and implements [`IntoResponse`]
/// to produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure talking to the remote SQL proxy.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A list editor operation failed.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Db(err) => classify_db_error(err),
            AppError::Editor(err) => match err {
                EditorError::UnknownItem(id) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Item with id {id} not found"),
                ),
                EditorError::IndexOutOfRange { .. } => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
                }
                EditorError::NotEditing(_) => internal(err),
                EditorError::Store(db) => classify_db_error(db),
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::RateLimited { retry_after_secs } => (
            StatusCode::TOO_MANY_REQUESTS,
            "RATE_LIMITED",
            format!("Please wait {retry_after_secs} seconds before trying again."),
        ),
    }
}

/// Classify a query proxy error into an HTTP status, error code, and message.
///
/// - An update without fields is the caller's fault and maps to 400.
/// - Everything else is an upstream failure: 502 with a sanitized message.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    match err {
        DbError::EmptyUpdate { table } => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!("Update for {table} must set at least one field"),
        ),
        other => {
            tracing::error!(error = %other, "Query proxy error");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "The data store request failed".to_string(),
            )
        }
    }
}

fn internal(err: &dyn std::fmt::Display) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
