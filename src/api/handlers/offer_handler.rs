//! Offer handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::AppJson;
use crate::api::views::OfferView;
use crate::api::AppState;
use crate::domain::Offer;
use crate::errors::{AppResult, OptionExt};

/// Create offer routes
pub fn offer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_offers).post(create_offer))
        .route("/:id", get(get_offer).put(update_offer).delete(delete_offer))
}

/// List all offers with executor names resolved
#[utoipa::path(
    get,
    path = "/offers",
    tag = "Offers",
    responses(
        (status = 200, description = "All offers", body = Vec<OfferView>)
    )
)]
pub async fn list_offers(State(state): State<AppState>) -> AppResult<Json<Vec<OfferView>>> {
    let users = state.uow.users();
    let offers = state.uow.offers().list().await?;

    let mut views = Vec::with_capacity(offers.len());
    for offer in offers {
        views.push(OfferView::build(offer, users.as_ref()).await?);
    }

    Ok(Json(views))
}

#[utoipa::path(
    post,
    path = "/offers",
    tag = "Offers",
    request_body = Offer,
    responses(
        (status = 201, description = "Offer created", body = String),
        (status = 400, description = "Malformed or incomplete body"),
        (status = 409, description = "An offer with this id already exists")
    )
)]
pub async fn create_offer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Offer>,
) -> AppResult<(StatusCode, &'static str)> {
    state.uow.offers().insert(payload).await?;
    Ok((StatusCode::CREATED, "Offer created"))
}

#[utoipa::path(
    get,
    path = "/offers/{id}",
    tag = "Offers",
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Offer found", body = OfferView),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<OfferView>> {
    let offer = state.uow.offers().get(id).await?.ok_or_not_found()?;
    let view = OfferView::build(offer, state.uow.users().as_ref()).await?;
    Ok(Json(view))
}

#[utoipa::path(
    put,
    path = "/offers/{id}",
    tag = "Offers",
    params(("id" = i32, Path, description = "Offer id")),
    request_body = Offer,
    responses(
        (status = 200, description = "Offer updated", body = String),
        (status = 400, description = "Malformed or incomplete body"),
        (status = 404, description = "Offer not found"),
        (status = 409, description = "The new id is taken")
    )
)]
pub async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<Offer>,
) -> AppResult<&'static str> {
    state.uow.offers().update(id, payload).await?;
    Ok("Offer updated")
}

#[utoipa::path(
    delete,
    path = "/offers/{id}",
    tag = "Offers",
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Offer deleted", body = String),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<&'static str> {
    state.uow.offers().delete(id).await?;
    tracing::info!(offer_id = id, "Offer deleted");
    Ok("Offer deleted")
}
