//! Test doubles for the external collaborators of the Folio crates.
//!
//! - [`QueryProxy`] -- a local stand-in for the remote SQL proxy, executing
//!   `{sql, values}` requests against an in-memory SQLite database created
//!   from `db/schema.sql`. Individual statements can be made to fail.
//! - [`WebhookSink`] -- records every JSON payload posted to it and answers
//!   with a configurable status.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Row, ValueRef};

/// Reference schema shared with deployments.
pub const SCHEMA: &str = include_str!("../../../db/schema.sql");

/// URL that refuses connections, for network-failure tests.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    addr
}

// ---------------------------------------------------------------------------
// QueryProxy
// ---------------------------------------------------------------------------

/// A statement as received by the proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQuery {
    pub sql: String,
    pub values: Vec<Value>,
}

/// Makes the proxy answer 500 for matching statements.
#[derive(Debug, Clone)]
pub struct FailureRule {
    /// Substring the statement text must contain.
    pub sql_contains: String,
    /// When set, one of the bound values must equal this.
    pub with_value: Option<Value>,
}

impl FailureRule {
    pub fn sql(needle: &str) -> Self {
        Self {
            sql_contains: needle.to_string(),
            with_value: None,
        }
    }

    pub fn sql_with_value(needle: &str, value: impl Into<Value>) -> Self {
        Self {
            sql_contains: needle.to_string(),
            with_value: Some(value.into()),
        }
    }

    fn matches(&self, sql: &str, values: &[Value]) -> bool {
        sql.contains(&self.sql_contains)
            && self
                .with_value
                .as_ref()
                .map_or(true, |needle| values.contains(needle))
    }
}

#[derive(Clone)]
struct ProxyState {
    pool: SqlitePool,
    log: Arc<Mutex<Vec<RecordedQuery>>>,
    failures: Arc<Mutex<Vec<FailureRule>>>,
}

#[derive(Deserialize)]
struct ProxyRequest {
    sql: String,
    #[serde(default)]
    values: Vec<Value>,
}

/// In-process fake of the remote SQL proxy.
pub struct QueryProxy {
    /// Base URL to hand to `QueryClient::new`.
    pub url: String,
    /// Direct handle on the backing database.
    pub pool: SqlitePool,
    log: Arc<Mutex<Vec<RecordedQuery>>>,
    failures: Arc<Mutex<Vec<FailureRule>>>,
}

impl QueryProxy {
    /// Start a proxy on an ephemeral port with an empty schema.
    pub async fn spawn() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("open in-memory sqlite");

        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .expect("apply schema");

        let state = ProxyState {
            pool: pool.clone(),
            log: Arc::default(),
            failures: Arc::default(),
        };

        let app = Router::new()
            .route("/api/query", post(handle_query))
            .with_state(state.clone());
        let addr = serve(app).await;

        Self {
            url: format!("http://{addr}"),
            pool,
            log: state.log,
            failures: state.failures,
        }
    }

    /// Every statement received so far, in arrival order.
    pub fn queries(&self) -> Vec<RecordedQuery> {
        self.log.lock().expect("query log").clone()
    }

    /// Statements whose text contains `needle`.
    pub fn queries_containing(&self, needle: &str) -> Vec<RecordedQuery> {
        self.queries()
            .into_iter()
            .filter(|q| q.sql.contains(needle))
            .collect()
    }

    pub fn clear_log(&self) {
        self.log.lock().expect("query log").clear();
    }

    pub fn fail_when(&self, rule: FailureRule) {
        self.failures.lock().expect("failure rules").push(rule);
    }

    pub fn clear_failures(&self) {
        self.failures.lock().expect("failure rules").clear();
    }

    /// Run a statement directly against the backing database.
    pub async fn run(&self, sql: &str, values: &[Value]) -> Value {
        execute(&self.pool, sql, values)
            .await
            .expect("direct statement")
    }
}

async fn handle_query(
    State(state): State<ProxyState>,
    Json(request): Json<ProxyRequest>,
) -> Response {
    state.log.lock().expect("query log").push(RecordedQuery {
        sql: request.sql.clone(),
        values: request.values.clone(),
    });

    let injected = state
        .failures
        .lock()
        .expect("failure rules")
        .iter()
        .any(|rule| rule.matches(&request.sql, &request.values));
    if injected {
        return (StatusCode::INTERNAL_SERVER_ERROR, "injected failure").into_response();
    }

    match execute(&state.pool, &request.sql, &request.values).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn execute(pool: &SqlitePool, sql: &str, values: &[Value]) -> Result<Value, sqlx::Error> {
    let mut query = sqlx::query(sql);
    for value in values {
        query = match value {
            Value::Null => query.bind(None::<String>),
            Value::Bool(b) => query.bind(*b),
            Value::Number(n) if n.is_i64() => query.bind(n.as_i64()),
            Value::Number(n) => query.bind(n.as_f64()),
            Value::String(s) => query.bind(s.clone()),
            other => query.bind(other.to_string()),
        };
    }

    if sql.trim_start().to_ascii_uppercase().starts_with("SELECT") {
        let rows = query.fetch_all(pool).await?;
        Ok(Value::Array(rows.iter().map(row_to_json).collect()))
    } else {
        let result = query.execute(pool).await?;
        Ok(serde_json::json!({ "affectedRows": result.rows_affected() }))
    }
}

fn row_to_json(row: &SqliteRow) -> Value {
    let mut record = Map::new();
    for column in row.columns() {
        let idx = column.ordinal();
        let is_null = row.try_get_raw(idx).map_or(true, |raw| raw.is_null());
        let value = if is_null {
            Value::Null
        } else if let Ok(v) = row.try_get::<i64, _>(idx) {
            Value::from(v)
        } else if let Ok(v) = row.try_get::<f64, _>(idx) {
            Value::from(v)
        } else if let Ok(v) = row.try_get::<String, _>(idx) {
            Value::from(v)
        } else {
            Value::Null
        };
        record.insert(column.name().to_string(), value);
    }
    Value::Object(record)
}

// ---------------------------------------------------------------------------
// WebhookSink
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct SinkState {
    received: Arc<Mutex<Vec<Value>>>,
    status: Arc<AtomicU16>,
}

/// Records webhook deliveries.
pub struct WebhookSink {
    /// Full URL to configure as the webhook target.
    pub url: String,
    received: Arc<Mutex<Vec<Value>>>,
    status: Arc<AtomicU16>,
}

impl WebhookSink {
    /// Start a sink answering `204 No Content`, like Discord does.
    pub async fn spawn() -> Self {
        Self::spawn_with_status(StatusCode::NO_CONTENT).await
    }

    pub async fn spawn_with_status(status: StatusCode) -> Self {
        let state = SinkState {
            received: Arc::default(),
            status: Arc::new(AtomicU16::new(status.as_u16())),
        };
        let app = Router::new()
            .route("/webhook", post(handle_webhook))
            .with_state(state.clone());
        let addr = serve(app).await;

        Self {
            url: format!("http://{addr}/webhook"),
            received: state.received,
            status: state.status,
        }
    }

    pub fn set_status(&self, status: StatusCode) {
        self.status.store(status.as_u16(), Ordering::SeqCst);
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().expect("webhook log").clone()
    }
}

async fn handle_webhook(State(state): State<SinkState>, Json(payload): Json<Value>) -> StatusCode {
    state.received.lock().expect("webhook log").push(payload);
    StatusCode::from_u16(state.status.load(Ordering::SeqCst))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
