//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{offer_routes, order_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the API router with all resource routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/users", user_routes())
        .nest("/orders", order_routes())
        .nest("/offers", offer_routes())
        .with_state(state)
}

/// Create the full application: API routes, Swagger UI and global middleware.
///
/// Trailing slashes are trimmed before API routing, so `/users/` is routed
/// like `/users`. Swagger UI stays outside the normalized router because it
/// redirects `/swagger-ui` to `/swagger-ui/`.
pub fn create_app(state: AppState) -> Router {
    let api = NormalizePathLayer::trim_trailing_slash().layer(create_router(state));

    Router::new()
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(api)
        // Global middleware
        .layer(TraceLayer::new_for_http())
}

/// Root endpoint
async fn root() -> &'static str {
    "Taskboard API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, database) = match state.uow.ping().await {
        Ok(_) => (
            StatusCode::OK,
            ServiceStatus {
                status: "healthy",
                error: None,
            },
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ServiceStatus {
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        ),
    };

    let response = HealthResponse {
        status: if status_code == StatusCode::OK {
            "healthy"
        } else {
            "degraded"
        },
        database,
    };

    (status_code, Json(response))
}
