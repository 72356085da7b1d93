#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_events::WebhookConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Admin secret used by [`test_config`].
pub const ADMIN_PASSWORD: &str = "let-me-in";

/// Build a test `ServerConfig` pointing at `query_api_url`.
///
/// Admin access is enabled with [`ADMIN_PASSWORD`], no webhook is
/// configured and the contact-form cooldown is the 60 second default.
pub fn test_config(query_api_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        request_timeout_secs: 30,
        query_api_url: query_api_url.to_string(),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        webhook: None,
        commission_cooldown_secs: 60,
    }
}

/// `test_config` with the webhook pointed at `url`.
pub fn config_with_webhook(query_api_url: &str, url: &str) -> ServerConfig {
    ServerConfig {
        webhook: Some(WebhookConfig {
            url: url.to_string(),
            artist_id: "424242".to_string(),
        }),
        ..test_config(query_api_url)
    }
}

/// Build the full application router, middleware included, exactly as the
/// binary does.
pub fn build_test_app(config: ServerConfig) -> Router {
    build_app_router(AppState::from_config(config))
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

fn admin_cookie() -> String {
    format!("password={ADMIN_PASSWORD}")
}

fn json_request(method: Method, uri: &str, body: &Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, empty_request(Method::GET, uri, Some(cookie))).await
}

pub async fn admin_get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, Some(&admin_cookie()))).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::POST, uri, &body, None)).await
}

pub async fn admin_post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::POST, uri, &body, Some(&admin_cookie()))).await
}

pub async fn admin_post(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::POST, uri, Some(&admin_cookie()))).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::PUT, uri, &body, None)).await
}

pub async fn admin_put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::PUT, uri, &body, Some(&admin_cookie()))).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, None)).await
}

pub async fn admin_delete(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, Some(&admin_cookie()))).await
}

/// POST a commission form as coming from `forwarded_for`.
pub async fn post_commission(app: Router, forwarded_for: Option<&str>, body: Value) -> Response {
    let mut request = json_request(Method::POST, "/api/send-commission", &body, None);
    if let Some(addr) = forwarded_for {
        request
            .headers_mut()
            .insert("x-forwarded-for", HeaderValue::from_str(addr).unwrap());
    }
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
