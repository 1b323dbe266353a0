//! Order record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order record as accepted on POST/PUT.
///
/// Dates travel as `MM/DD/YYYY` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = "Move a sofa")]
    pub name: String,
    #[schema(example = "Third floor, no elevator")]
    pub description: String,
    #[serde(with = "super::date::mdy")]
    #[schema(value_type = String, example = "01/15/2024")]
    pub start_date: NaiveDate,
    #[serde(with = "super::date::mdy")]
    #[schema(value_type = String, example = "01/20/2024")]
    pub end_date: NaiveDate,
    #[schema(example = "12 Lenina St")]
    pub address: String,
    #[schema(example = 3500)]
    pub price: i32,
    /// Reference to the customer user
    #[schema(example = 1)]
    pub customer_id: i32,
    /// Reference to the executor user
    #[schema(example = 2)]
    pub executor_id: i32,
}
