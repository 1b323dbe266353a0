//! Offer record: an executor's bid on an order.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Offer {
    #[schema(example = 100)]
    pub id: i32,
    /// Reference to the order
    #[schema(example = 10)]
    pub order_id: i32,
    /// Reference to the executor user
    #[schema(example = 2)]
    pub executor_id: i32,
}
