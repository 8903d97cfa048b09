//! End-to-end smoke tests for the full homelistd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use homelist_adapter_http_axum::router;
use homelist_adapter_http_axum::state::AppState;
use homelist_adapter_storage_sqlite_sqlx::{Config, SqliteHomeRepository};
use homelist_app::services::home_service::HomeService;
use serde_json::{Value, json};
use tower::ServiceExt;

const LISTING: &str = r#"{"area":"50","floor":"2","rooms":"3","price":"100000","currency":"USD"}"#;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let home_repo = SqliteHomeRepository::new(db.pool().clone());
    router::build(AppState::new(HomeService::new(home_repo)))
}

async fn send(app: &axum::Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

async fn read_json(response: Response) -> Value {
    serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

async fn create_listing(app: &axum::Router, body: &str) -> i64 {
    let resp = send(app, with_json("POST", "/homes", body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    read_json(resp).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = send(&app, get("/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_home_lifecycle() {
    let app = app().await;

    // Create
    let resp = send(&app, with_json("POST", "/homes", LISTING)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created = read_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(
        created,
        json!({
            "id": id,
            "area": "50",
            "floor": "2",
            "rooms": "3",
            "price": "100000",
            "currency": "USD"
        })
    );

    // List contains exactly that record
    let resp = send(&app, get("/homes")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!([created]));

    // Show
    let resp = send(&app, get(&format!("/homes/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, created);

    // Delete
    let resp = send(&app, delete(&format!("/homes/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    // Gone
    let resp = send(&app, get(&format!("/homes/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// PATCH / PUT semantics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_change_only_price_when_patching() {
    let app = app().await;
    let id = create_listing(&app, LISTING).await;

    let resp = send(
        &app,
        with_json("PATCH", &format!("/homes/{id}"), r#"{"price":"500"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["price"], "500");

    let stored = read_json(send(&app, get(&format!("/homes/{id}"))).await).await;
    assert_eq!(
        stored,
        json!({
            "id": id,
            "area": "50",
            "floor": "2",
            "rooms": "3",
            "price": "500",
            "currency": "USD"
        })
    );
}

#[tokio::test]
async fn should_reject_patch_with_wrong_type_and_keep_record() {
    let app = app().await;
    let id = create_listing(&app, LISTING).await;

    let resp = send(
        &app,
        with_json("PATCH", &format!("/homes/{id}"), r#"{"rooms":4}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = read_json(send(&app, get(&format!("/homes/{id}"))).await).await;
    assert_eq!(stored["rooms"], "3");
}

#[tokio::test]
async fn should_overwrite_all_fields_and_keep_id_when_replacing() {
    let app = app().await;
    let id = create_listing(&app, LISTING).await;

    let replacement = r#"{"area":"90","floor":"7","rooms":"4","price":"420000","currency":"EUR"}"#;
    let resp = send(&app, with_json("PUT", &format!("/homes/{id}"), replacement)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let expected = json!({
        "id": id,
        "area": "90",
        "floor": "7",
        "rooms": "4",
        "price": "420000",
        "currency": "EUR"
    });
    assert_eq!(read_json(resp).await, expected);

    let stored = read_json(send(&app, get(&format!("/homes/{id}"))).await).await;
    assert_eq!(stored, expected);
}

#[tokio::test]
async fn should_reject_replace_with_missing_field() {
    let app = app().await;
    let id = create_listing(&app, LISTING).await;

    let resp = send(
        &app,
        with_json("PUT", &format!("/homes/{id}"), r#"{"price":"1"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = read_json(send(&app, get(&format!("/homes/{id}"))).await).await;
    assert_eq!(stored["price"], "100000");
}

// ---------------------------------------------------------------------------
// Missing ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_unknown_id() {
    let app = app().await;

    for request in [
        get("/homes/999"),
        with_json("PATCH", "/homes/999", r#"{"price":"500"}"#),
        with_json("PUT", "/homes/999", LISTING),
        delete("/homes/999"),
    ] {
        let resp = send(&app, request).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(read_json(resp).await["error"].is_string());
    }
}

// ---------------------------------------------------------------------------
// Validation and bulk clear
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_not_create_row_when_any_field_missing() {
    let app = app().await;
    create_listing(&app, LISTING).await;

    for key in ["area", "floor", "rooms", "price", "currency"] {
        let mut body: Value = serde_json::from_str(LISTING).unwrap();
        body.as_object_mut().unwrap().remove(key);

        let resp = send(&app, with_json("POST", "/homes", body.to_string())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "without `{key}`");
    }

    let list = read_json(send(&app, get("/homes")).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_leave_empty_list_after_clear() {
    let app = app().await;
    for _ in 0..4 {
        create_listing(&app, LISTING).await;
    }

    let resp = send(&app, delete("/homes")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let list = read_json(send(&app, get("/homes")).await).await;
    assert_eq!(list, json!([]));

    // Clearing an empty table still succeeds.
    let resp = send(&app, delete("/homes")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
