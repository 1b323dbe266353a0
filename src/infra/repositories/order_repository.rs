//! Order repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::order::{self, ActiveModel, Entity as OrderEntity};
use crate::config::ENTITY_ORDER;
use crate::domain::Order;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Order repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Order>>;

    async fn get(&self, id: i32) -> AppResult<Option<Order>>;

    async fn insert(&self, order: Order) -> AppResult<Order>;

    /// Replace every field of the order at `id`, including the ID itself
    async fn update(&self, id: i32, order: Order) -> AppResult<Order>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of OrderRepository
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn list(&self) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Order::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Order>> {
        let result = OrderEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Order::from))
    }

    async fn insert(&self, order: Order) -> AppResult<Order> {
        let key = order.id;
        OrderEntity::insert(ActiveModel::from(order.clone()))
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, format!("{} {}", ENTITY_ORDER, key)))?;

        tracing::debug!(order_id = key, "Order inserted");
        Ok(order)
    }

    async fn update(&self, id: i32, order: Order) -> AppResult<Order> {
        let key = order.id;
        let result = OrderEntity::update_many()
            .set(ActiveModel::from(order.clone()))
            .filter(order::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, format!("{} {}", ENTITY_ORDER, key)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        if key != id {
            tracing::warn!(old_id = id, new_id = key, "Order re-keyed by update");
        }

        Ok(order)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = OrderEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
