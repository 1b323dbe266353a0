//! Read models for orders and offers.
//!
//! User references are swapped for the referenced user's first name on
//! every read. Nothing is cached: each request looks the users up again.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Offer, Order, UserRef};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// Order as returned by GET
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderView {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(example = "2024-01-15")]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-20")]
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i32,
    /// Customer first name, or the raw id when no such user exists
    pub customer_id: UserRef,
    /// Executor first name, or the raw id when no such user exists
    pub executor_id: UserRef,
}

/// Offer as returned by GET
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OfferView {
    pub id: i32,
    pub order_id: i32,
    /// Executor first name, or the raw id when no such user exists
    pub executor_id: UserRef,
}

/// Look up user `id` and produce its display value.
pub async fn resolve_user(users: &dyn UserRepository, id: i32) -> AppResult<UserRef> {
    let user = users.get(id).await?;
    Ok(UserRef::resolve(id, user.as_ref()))
}

impl OrderView {
    pub async fn build(order: Order, users: &dyn UserRepository) -> AppResult<Self> {
        let customer_id = resolve_user(users, order.customer_id).await?;
        let executor_id = resolve_user(users, order.executor_id).await?;

        Ok(Self {
            id: order.id,
            name: order.name,
            description: order.description,
            start_date: order.start_date,
            end_date: order.end_date,
            address: order.address,
            price: order.price,
            customer_id,
            executor_id,
        })
    }
}

impl OfferView {
    pub async fn build(offer: Offer, users: &dyn UserRepository) -> AppResult<Self> {
        let executor_id = resolve_user(users, offer.executor_id).await?;

        Ok(Self {
            id: offer.id,
            order_id: offer.order_id,
            executor_id,
        })
    }
}
