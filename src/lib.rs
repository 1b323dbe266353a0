//! Taskboard API - users, orders and offers over HTTP
//!
//! A small CRUD service: three record types in a relational store, exposed
//! as JSON resources, with fixture data loaded at startup.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records and their wire formats
//! - **infra**: Database, migrations, seeding and repositories
//! - **api**: HTTP handlers, read models and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (migrates and seeds first)
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Load fixture data
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Offer, Order, User, UserRef};
pub use errors::{AppError, AppResult};
