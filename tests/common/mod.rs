//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use taskboard_api::api::{create_app, AppState};
use taskboard_api::config::Config;
use taskboard_api::infra::Database;

/// Fresh in-memory database with the schema applied.
pub async fn memory_db() -> Database {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        ..Config::default()
    };
    Database::connect(&config)
        .await
        .expect("in-memory database should connect")
}

/// Application over a fresh, seeded in-memory database.
pub async fn seeded_app() -> Router {
    let db = memory_db().await;
    db.seed().await.expect("fixtures should load");
    create_app(AppState::from_database(&db))
}

/// Application over a fresh, empty in-memory database.
pub async fn empty_app() -> Router {
    let db = memory_db().await;
    create_app(AppState::from_database(&db))
}

/// Send one request and return the status with the raw body text.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Send one request and parse the body as JSON.
pub async fn send_json(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let (status, text) = send(app, method, uri, None).await;
    let value = serde_json::from_str(&text).unwrap_or(Value::Null);
    (status, value)
}
