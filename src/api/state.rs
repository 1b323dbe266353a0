//! Application state - Dependency injection container.
//!
//! Built once at startup and handed to the router; handlers reach storage
//! only through it.

use std::sync::Arc;

use crate::infra::{Database, Persistence, UnitOfWork};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Repository access
    pub uow: Arc<dyn UnitOfWork>,
}

impl AppState {
    /// Create application state over a connected database.
    pub fn from_database(database: &Database) -> Self {
        Self::new(Arc::new(Persistence::new(database.get_connection())))
    }

    /// Create application state with a manually injected Unit of Work.
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }
}
