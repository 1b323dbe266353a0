//! Unit of Work - centralized repository access.
//!
//! The Unit of Work hands out the three record repositories over one shared
//! connection pool, and answers connectivity checks for the health endpoint.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use std::sync::Arc;

use super::repositories::{
    OfferRepository, OfferStore, OrderRepository, OrderStore, UserRepository, UserStore,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get order repository
    fn orders(&self) -> Arc<dyn OrderRepository>;

    /// Get offer repository
    fn offers(&self) -> Arc<dyn OfferRepository>;

    /// Check storage connectivity
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    order_repo: Arc<OrderStore>,
    offer_repo: Arc<OfferStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let order_repo = Arc::new(OrderStore::new(db.clone()));
        let offer_repo = Arc::new(OfferStore::new(db.clone()));
        Self {
            db,
            user_repo,
            order_repo,
            offer_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.order_repo.clone()
    }

    fn offers(&self) -> Arc<dyn OfferRepository> {
        self.offer_repo.clone()
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
