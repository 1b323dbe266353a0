//! Domain layer - the records the service stores and serves.
//!
//! Domain types are independent of the storage entities in
//! `infra::repositories::entities`; conversions live next to the entities.

pub mod date;
pub mod offer;
pub mod order;
pub mod user;

pub use offer::Offer;
pub use order::Order;
pub use user::{User, UserRef};
