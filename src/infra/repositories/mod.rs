//! Repository layer - Data access abstraction
//!
//! One repository per record type, each over a SeaORM entity.
//! Reads return `Option`; writes on a missing key return `AppError::NotFound`.

pub(crate) mod entities;
mod offer_repository;
mod order_repository;
mod user_repository;

pub use offer_repository::{OfferRepository, OfferStore};
pub use order_repository::{OrderRepository, OrderStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use offer_repository::MockOfferRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::MockOrderRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
