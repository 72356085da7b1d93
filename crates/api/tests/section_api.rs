//! HTTP-level tests for the section endpoints (prices, gallery, ToS, banner)
//! against the local SQL proxy double.

mod common;

use axum::http::StatusCode;
use common::{
    admin_delete, admin_get, admin_post, admin_post_json, admin_put_json, body_json, get,
    test_config,
};
use folio_test_support::{FailureRule, QueryProxy};
use serde_json::{json, Value};

async fn setup() -> (QueryProxy, axum::Router) {
    let proxy = QueryProxy::spawn().await;
    let app = common::build_test_app(test_config(&proxy.url));
    (proxy, app)
}

async fn create_price(app: &axum::Router, kind: &str) -> Value {
    let response = admin_post_json(
        app.clone(),
        "/api/prices",
        json!({ "image": "/p.png", "type": kind, "price": "$30", "description": "desc" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_price_is_listed() {
    let (_proxy, app) = setup().await;
    let created = create_price(&app, "Sketch").await;
    assert_eq!(created["order"], 1);
    assert!(created["id"].as_i64().unwrap() > 0);

    let response = get(app, "/api/prices").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], json!([created]));
}

#[tokio::test]
async fn new_prices_are_appended() {
    let (_proxy, app) = setup().await;
    create_price(&app, "Sketch").await;
    let second = create_price(&app, "Full").await;
    assert_eq!(second["order"], 2);
}

#[tokio::test]
async fn partial_update_changes_only_given_fields() {
    let (_proxy, app) = setup().await;
    let created = create_price(&app, "Sketch").await;
    let id = created["id"].as_i64().unwrap();

    let response = admin_put_json(
        app.clone(),
        &format!("/api/prices/{id}"),
        json!({ "price": "$45" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["price"], "$45");
    assert_eq!(json["data"]["type"], "Sketch");
    assert_eq!(json["data"]["description"], "desc");
}

#[tokio::test]
async fn empty_update_is_rejected_without_a_query() {
    let (proxy, app) = setup().await;
    let created = create_price(&app, "Sketch").await;
    let id = created["id"].as_i64().unwrap();
    proxy.clear_log();

    let response = admin_put_json(app, &format!("/api/prices/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(proxy.queries_containing("UPDATE").is_empty());
}

#[tokio::test]
async fn unknown_update_field_is_rejected() {
    let (proxy, app) = setup().await;
    proxy.clear_log();

    let response = admin_put_json(
        app,
        "/api/prices/1",
        json!({ "price = 0 WHERE 1 = 1; --": "x" }),
    )
    .await;
    assert!(response.status().is_client_error());
    assert!(proxy.queries().is_empty());
}

#[tokio::test]
async fn missing_price_is_404() {
    let (_proxy, app) = setup().await;
    let response = get(app.clone(), "/api/prices/12345").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = admin_put_json(app, "/api/prices/12345", json!({ "price": "$1" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_price_and_ignores_unknown_ids() {
    let (_proxy, app) = setup().await;
    let created = create_price(&app, "Sketch").await;
    let id = created["id"].as_i64().unwrap();

    let response = admin_delete(app.clone(), &format!("/api/prices/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = admin_delete(app.clone(), "/api/prices/999").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app, "/api/prices").await).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn reorder_persists_one_based_order() {
    let (_proxy, app) = setup().await;
    let a = create_price(&app, "A").await;
    let b = create_price(&app, "B").await;
    let c = create_price(&app, "C").await;

    let response = admin_put_json(
        app.clone(),
        "/api/prices/order",
        json!({ "from": 2, "to": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["failed"], json!([]));

    let listed = body_json(get(app, "/api/prices").await).await;
    let rows: Vec<(Value, Value)> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| (p["id"].clone(), p["order"].clone()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (c["id"].clone(), json!(1)),
            (a["id"].clone(), json!(2)),
            (b["id"].clone(), json!(3)),
        ]
    );
}

#[tokio::test]
async fn reorder_out_of_range_is_400() {
    let (_proxy, app) = setup().await;
    create_price(&app, "A").await;

    let response = admin_put_json(app, "/api/prices/order", json!({ "from": 0, "to": 3 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn placeholder_price_uses_defaults() {
    let (_proxy, app) = setup().await;
    create_price(&app, "A").await;

    let response = admin_post(app, "/api/prices/placeholder").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["type"], "New Type");
    assert_eq!(json["data"]["price"], "New Price");
    assert_eq!(json["data"]["image"], "/placeholder.svg");
    assert_eq!(json["data"]["order"], 2);
}

#[tokio::test]
async fn proxy_failure_surfaces_as_502() {
    let (proxy, app) = setup().await;
    proxy.fail_when(FailureRule::sql("INSERT INTO prices"));

    let response = admin_post_json(
        app,
        "/api/prices",
        json!({ "image": "/p.png", "type": "A", "price": "$1", "description": "d" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    // Upstream details are not leaked.
    assert_eq!(json["error"], "The data store request failed");
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gallery_client_credit_can_be_set_and_cleared() {
    let (_proxy, app) = setup().await;
    let response = admin_post_json(
        app.clone(),
        "/api/gallery-items",
        json!({ "image": "/g.png", "type": "Icon" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["client"], "");

    let id = created["id"].as_i64().unwrap();
    let response = admin_put_json(
        app.clone(),
        &format!("/api/gallery-items/{id}"),
        json!({ "client": "Mika" }),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["client"], "Mika");

    let response = admin_put_json(
        app,
        &format!("/api/gallery-items/{id}"),
        json!({ "client": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["client"], "");
}

#[tokio::test]
async fn gallery_feed_pages_by_twelve() {
    let (_proxy, app) = setup().await;
    for i in 0..13 {
        let response = admin_post_json(
            app.clone(),
            "/api/gallery-items",
            json!({ "image": format!("/g{i}.png"), "type": "Piece", "order": i + 1 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let first = body_json(get(app.clone(), "/api/gallery").await).await;
    assert_eq!(first["data"]["items"].as_array().unwrap().len(), 12);
    assert_eq!(first["data"]["page"], 1);
    assert_eq!(first["data"]["has_more"], true);
    assert_eq!(first["data"]["total"], 13);

    let second = body_json(get(app.clone(), "/api/gallery?page=2").await).await;
    assert_eq!(second["data"]["items"].as_array().unwrap().len(), 13);
    assert_eq!(second["data"]["has_more"], false);

    let clamped = body_json(get(app, "/api/gallery?page=0").await).await;
    assert_eq!(clamped["data"]["page"], 1);
}

// ---------------------------------------------------------------------------
// Terms of service
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tos_crud_round_trip() {
    let (_proxy, app) = setup().await;
    let response = admin_post_json(
        app.clone(),
        "/api/tos",
        json!({ "title": "Payment", "content": "Upfront" }),
    )
    .await;
    let created = body_json(response).await["data"].clone();
    let id = created["id"].as_i64().unwrap();

    let response = admin_put_json(
        app.clone(),
        &format!("/api/tos/{id}"),
        json!({ "content": "Half upfront" }),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["content"], "Half upfront");

    let placeholder = body_json(admin_post(app.clone(), "/api/tos/placeholder").await).await;
    assert_eq!(placeholder["data"]["title"], "New Title");
    assert_eq!(placeholder["data"]["order"], 2);

    admin_delete(app.clone(), &format!("/api/tos/{id}")).await;
    let listed = body_json(get(app, "/api/tos").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Banner and home page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn banner_falls_back_to_placeholder() {
    let (_proxy, app) = setup().await;
    let json = body_json(get(app, "/api/banner").await).await;
    assert_eq!(json["data"], json!({ "id": 0, "image": "/placeholder.svg" }));
}

#[tokio::test]
async fn replacing_banner_keeps_history() {
    let (_proxy, app) = setup().await;

    let first = admin_put_json(app.clone(), "/api/banner", json!({ "image": "/one.png" })).await;
    assert_eq!(first.status(), StatusCode::OK);
    let second = admin_put_json(app.clone(), "/api/banner", json!({ "image": "/two.png" })).await;
    let second = body_json(second).await["data"].clone();

    let current = body_json(get(app.clone(), "/api/banner").await).await;
    assert_eq!(current["data"], second);

    let history = body_json(admin_get(app.clone(), "/api/banner/history").await).await;
    assert_eq!(history["data"].as_array().unwrap().len(), 2);

    let id = second["id"].as_i64().unwrap();
    let response = admin_delete(app.clone(), &format!("/api/banner/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let current = body_json(get(app, "/api/banner").await).await;
    assert_eq!(current["data"]["image"], "/one.png");
}

#[tokio::test]
async fn home_collects_every_section() {
    let (_proxy, app) = setup().await;
    create_price(&app, "Sketch").await;
    admin_post_json(
        app.clone(),
        "/api/tos",
        json!({ "title": "Usage", "content": "Personal" }),
    )
    .await;

    let json = body_json(get(app.clone(), "/api/home").await).await;
    let data = &json["data"];
    assert_eq!(data["is_admin"], false);
    assert_eq!(data["banner"]["image"], "/placeholder.svg");
    assert_eq!(data["prices"].as_array().unwrap().len(), 1);
    assert_eq!(data["gallery"], json!([]));
    assert_eq!(data["tos"][0]["title"], "Usage");

    let json = body_json(admin_get(app, "/api/home").await).await;
    assert_eq!(json["data"]["is_admin"], true);
}
