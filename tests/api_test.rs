//! HTTP tests driving the full router over in-memory SQLite.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{empty_app, seeded_app, send, send_json};

fn user_body(id: i32, first_name: &str) -> Value {
    json!({
        "id": id,
        "first_name": first_name,
        "last_name": "Sidorova",
        "age": 29,
        "email": "new.user@mail.example",
        "role": "customer",
        "phone": "+79007778899"
    })
}

fn order_body(id: i32, customer_id: i32, start_date: &str) -> Value {
    json!({
        "id": id,
        "name": "Fix a tap",
        "description": "Kitchen tap drips",
        "start_date": start_date,
        "end_date": "01/20/2024",
        "address": "5 Gagarina St",
        "price": 1500,
        "customer_id": customer_id,
        "executor_id": 2
    })
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_list_users_after_seeding() {
    let app = seeded_app().await;

    let (status, body) = send_json(&app, "GET", "/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 5);
    assert!(users
        .iter()
        .any(|u| u["id"] == 1 && u["first_name"] == "Ann" && u["role"] == "customer"));
}

#[tokio::test]
async fn test_create_then_get_user() {
    let app = empty_app().await;

    let (status, text) = send(&app, "POST", "/users", Some(user_body(42, "Vera"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(text, "User created");

    let (status, body) = send_json(&app, "GET", "/users/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, user_body(42, "Vera"));
}

#[tokio::test]
async fn test_create_duplicate_user_is_conflict() {
    let app = seeded_app().await;

    let (status, body) = send(&app, "POST", "/users", Some(user_body(1, "Vera"))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("CONFLICT"));
}

#[tokio::test]
async fn test_create_user_with_missing_field_is_bad_request() {
    let app = empty_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"id": 5, "first_name": "Vera"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("BAD_REQUEST"));
}

#[tokio::test]
async fn test_update_user_changes_submitted_fields() {
    let app = seeded_app().await;
    let mut changed = user_body(1, "Anna");
    changed["age"] = json!(35);

    let (status, text) = send(&app, "PUT", "/users/1", Some(changed.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "User updated");

    let (_, body) = send_json(&app, "GET", "/users/1").await;
    assert_eq!(body, changed);
}

#[tokio::test]
async fn test_update_user_with_new_id_moves_record() {
    let app = seeded_app().await;

    let (status, _) = send(&app, "PUT", "/users/3", Some(user_body(300, "Clara"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&app, "GET", "/users/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = send_json(&app, "GET", "/users/300").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Clara");
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let app = empty_app().await;

    let (status, body) = send_json(&app, "GET", "/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = send(&app, "PUT", "/users/999", Some(user_body(999, "Nobody"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_then_get_is_not_found() {
    let app = seeded_app().await;

    let (status, text) = send(&app, "DELETE", "/users/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "User deleted");

    let (status, _) = send_json(&app, "GET", "/users/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let app = seeded_app().await;

    let (status, with_slash) = send_json(&app, "GET", "/users/").await;
    assert_eq!(status, StatusCode::OK);
    let (_, without_slash) = send_json(&app, "GET", "/users").await;
    assert_eq!(with_slash, without_slash);

    let (status, body) = send_json(&app, "GET", "/users/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Ann");
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_order_customer_resolves_until_user_deleted() {
    let app = seeded_app().await;

    let (status, body) = send_json(&app, "GET", "/orders/10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer_id"], "Ann");
    assert_eq!(body["executor_id"], "Boris");

    let (status, _) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app, "GET", "/orders/10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer_id"], 1);
}

#[tokio::test]
async fn test_order_with_dangling_customer_shows_raw_id() {
    let app = seeded_app().await;

    let (status, _) = send(&app, "POST", "/orders", Some(order_body(50, 777, "01/15/2024"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send_json(&app, "GET", "/orders").await;
    let order = body
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["id"] == 50)
        .cloned()
        .unwrap();
    assert_eq!(order["customer_id"], 777);
    assert_eq!(order["executor_id"], "Boris");
}

#[tokio::test]
async fn test_order_date_round_trip() {
    let app = empty_app().await;

    let (status, text) = send(&app, "POST", "/orders", Some(order_body(60, 1, "01/15/2024"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(text, "Order created");

    let (_, body) = send_json(&app, "GET", "/orders/60").await;
    assert_eq!(body["start_date"], "2024-01-15");
    assert_eq!(body["end_date"], "2024-01-20");
}

#[tokio::test]
async fn test_order_with_malformed_date_is_bad_request() {
    let app = empty_app().await;

    let (status, body) = send(&app, "POST", "/orders", Some(order_body(61, 1, "2024-01-15"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("MM/DD/YYYY"));
}

#[tokio::test]
async fn test_update_and_delete_order() {
    let app = seeded_app().await;
    let mut changed = order_body(11, 3, "05/04/2024");
    changed["price"] = json!(9000);

    let (status, text) = send(&app, "PUT", "/orders/11", Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "Order updated");

    let (_, body) = send_json(&app, "GET", "/orders/11").await;
    assert_eq!(body["id"], 11);
    assert_eq!(body["price"], 9000);
    assert_eq!(body["start_date"], "2024-05-04");
    assert_eq!(body["customer_id"], "Clara");

    let (status, text) = send(&app, "DELETE", "/orders/11", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "Order deleted");
    let (status, _) = send_json(&app, "GET", "/orders/11").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Offers
// =============================================================================

#[tokio::test]
async fn test_list_offers_resolves_executor() {
    let app = seeded_app().await;

    let (status, body) = send_json(&app, "GET", "/offers").await;

    assert_eq!(status, StatusCode::OK);
    let offer = body
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["id"] == 100)
        .cloned()
        .unwrap();
    assert_eq!(offer["order_id"], 10);
    assert_eq!(offer["executor_id"], "Boris");
}

#[tokio::test]
async fn test_offer_crud() {
    let app = empty_app().await;
    let offer = json!({"id": 500, "order_id": 10, "executor_id": 2});

    let (status, text) = send(&app, "POST", "/offers", Some(offer)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(text, "Offer created");

    // No users exist, so the executor stays a raw id
    let (_, body) = send_json(&app, "GET", "/offers/500").await;
    assert_eq!(body, json!({"id": 500, "order_id": 10, "executor_id": 2}));

    let (status, _) = send(
        &app,
        "PUT",
        "/offers/500",
        Some(json!({"id": 500, "order_id": 11, "executor_id": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send_json(&app, "GET", "/offers/500").await;
    assert_eq!(body["order_id"], 11);

    let (status, _) = send(&app, "DELETE", "/offers/500", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_json(&app, "GET", "/offers/500").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Service endpoints
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let app = empty_app().await;

    let (status, body) = send_json(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = empty_app().await;

    let (status, body) = send_json(&app, "GET", "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/orders/{id}"].is_object());
}
