//! Infrastructure layer - External systems integration
//!
//! This module handles all storage concerns:
//! - Database connection, migrations and fixture seeding
//! - Record repositories
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator, SeedReport, Seeder};
pub use repositories::{
    OfferRepository, OfferStore, OrderRepository, OrderStore, UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockOfferRepository, MockOrderRepository, MockUserRepository};
