//! 规则 API 集成测试
//!
//! 使用内存存储构建完整路由，通过 oneshot 验证 HTTP 行为。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use reguler_rules_service::{
    FIELD_CATALOG, MemoryRuleStore, dto::RulePageResponse, routes::build_router, state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn create_test_app() -> (Router, Arc<MemoryRuleStore>) {
    let store = Arc::new(MemoryRuleStore::seeded());
    let app = build_router(AppState::new(store.clone()));
    (app, store)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_fields() {
    let (app, _) = create_test_app();

    let (status, body) = send(app, get("/api/rules/fields")).await;
    assert_eq!(status, StatusCode::OK);

    let fields: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(fields, FIELD_CATALOG);
}

#[tokio::test]
async fn test_list_rules_defaults() {
    let (app, _) = create_test_app();

    let (status, body) = send(app, get("/api/rules")).await;
    assert_eq!(status, StatusCode::OK);

    let page: RulePageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.page, 0);
    assert_eq!(page.size, 25);
    assert_eq!(page.data.len(), 2);
    assert!(page.data.iter().all(|row| row.id.is_none()));
}

#[tokio::test]
async fn test_list_rules_paginates_seed_data() {
    let (app, _) = create_test_app();

    let (_, body) = send(app.clone(), get("/api/rules?page=0&size=1")).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["Rule Type"], "Type A");
    assert_eq!(body["data"][0]["Zip Code"], "90001");
    assert_eq!(body["data"][0]["Refill"], 2);
    assert_eq!(body["total"], 2);

    let (_, body) = send(app.clone(), get("/api/rules?page=1&size=1")).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["data"][0]["Rule Type"], "Type B");
    assert_eq!(body["page"], 1);
    assert_eq!(body["size"], 1);

    let (_, body) = send(app, get("/api/rules?page=2&size=1")).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_negative_page_rejected() {
    let (app, _) = create_test_app();

    let (status, _) = send(app, get("/api/rules?page=-1&size=10")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rule_in_mock_mode() {
    let (app, store) = create_test_app();

    let (status, body) = send(
        app.clone(),
        json_request("POST", "/api/rules", json!({"Rule Type": "Type C"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(store.snapshot().len(), 3);

    let (_, body) = send(app, get("/api/rules?page=2&size=1")).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"][0], json!({"Rule Type": "Type C"}));
}

#[tokio::test]
async fn test_create_rule_rejects_nested_values() {
    let (app, store) = create_test_app();

    let (status, _) = send(
        app,
        json_request("POST", "/api/rules", json!({"Rule Type": {"nested": true}})),
    )
    .await;
    assert!(status.is_client_error());
    assert_eq!(store.snapshot().len(), 2);
}

#[tokio::test]
async fn test_update_in_mock_mode_changes_nothing() {
    let (app, store) = create_test_app();
    let before = store.snapshot();

    let (status, body) = send(
        app,
        json_request("PUT", "/api/rules/0", json!({"Rule Type": "Changed"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn test_export_csv() {
    let (app, _) = create_test_app();

    let response = app.oneshot(get("/api/rules/export?page=0&size=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    assert!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("reguler_rules_export.csv")
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], FIELD_CATALOG.join(","));
    assert!(lines[1].starts_with("\"Type A\",\"CA\",\"CA\",\"90001\""));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, _) = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/rules/fields")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_health_and_ready() {
    let (app, _) = create_test_app();

    let (status, body) = send(app.clone(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");

    let (status, body) = send(app, get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["checks"]["storage"]["mode"], "mock");
    assert_eq!(body["checks"]["storage"]["status"], "ok");
}
