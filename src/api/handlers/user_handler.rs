//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::AppJson;
use crate::api::AppState;
use crate::domain::User;
use crate::errors::{AppResult, OptionExt};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.uow.users().list().await?;
    Ok(Json(users))
}

/// Create a user with a caller-chosen id
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = String),
        (status = 400, description = "Malformed or incomplete body"),
        (status = 409, description = "A user with this id already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<User>,
) -> AppResult<(StatusCode, &'static str)> {
    state.uow.users().insert(payload).await?;
    Ok((StatusCode::CREATED, "User created"))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.uow.users().get(id).await?.ok_or_not_found()?;
    Ok(Json(user))
}

/// Replace every field of a user, including its id
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = String),
        (status = 400, description = "Malformed or incomplete body"),
        (status = 404, description = "User not found"),
        (status = 409, description = "The new id is taken")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<User>,
) -> AppResult<&'static str> {
    state.uow.users().update(id, payload).await?;
    Ok("User updated")
}

/// Delete user (references to it in orders and offers are left in place)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<&'static str> {
    state.uow.users().delete(id).await?;
    tracing::info!(user_id = id, "User deleted");
    Ok("User deleted")
}
