//! Order handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::AppJson;
use crate::api::views::OrderView;
use crate::api::AppState;
use crate::domain::Order;
use crate::errors::{AppResult, OptionExt};

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order).put(update_order).delete(delete_order))
}

/// List all orders with customer and executor names resolved
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders", body = Vec<OrderView>)
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<OrderView>>> {
    let users = state.uow.users();
    let orders = state.uow.orders().list().await?;

    let mut views = Vec::with_capacity(orders.len());
    for order in orders {
        views.push(OrderView::build(order, users.as_ref()).await?);
    }

    Ok(Json(views))
}

/// Create an order; dates are `MM/DD/YYYY`
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = Order,
    responses(
        (status = 201, description = "Order created", body = String),
        (status = 400, description = "Malformed body or date"),
        (status = 409, description = "An order with this id already exists")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Order>,
) -> AppResult<(StatusCode, &'static str)> {
    state.uow.orders().insert(payload).await?;
    Ok((StatusCode::CREATED, "Order created"))
}

/// Get order by ID
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderView),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<OrderView>> {
    let order = state.uow.orders().get(id).await?.ok_or_not_found()?;
    let view = OrderView::build(order, state.uow.users().as_ref()).await?;
    Ok(Json(view))
}

/// Replace every field of an order, including its id
#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order id")),
    request_body = Order,
    responses(
        (status = 200, description = "Order updated", body = String),
        (status = 400, description = "Malformed body or date"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "The new id is taken")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<Order>,
) -> AppResult<&'static str> {
    state.uow.orders().update(id, payload).await?;
    Ok("Order updated")
}

/// Delete order
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted", body = String),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<&'static str> {
    state.uow.orders().delete(id).await?;
    tracing::info!(order_id = id, "Order deleted");
    Ok("Order deleted")
}
