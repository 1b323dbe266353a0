//! Offer repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::offer::{self, ActiveModel, Entity as OfferEntity};
use crate::config::ENTITY_OFFER;
use crate::domain::Offer;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Offer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Offer>>;

    async fn get(&self, id: i32) -> AppResult<Option<Offer>>;

    async fn insert(&self, offer: Offer) -> AppResult<Offer>;

    /// Replace every field of the offer at `id`, including the ID itself
    async fn update(&self, id: i32, offer: Offer) -> AppResult<Offer>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of OfferRepository
pub struct OfferStore {
    db: DatabaseConnection,
}

impl OfferStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OfferRepository for OfferStore {
    async fn list(&self) -> AppResult<Vec<Offer>> {
        let models = OfferEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Offer::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Offer>> {
        let result = OfferEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Offer::from))
    }

    async fn insert(&self, offer: Offer) -> AppResult<Offer> {
        let key = offer.id;
        OfferEntity::insert(ActiveModel::from(offer.clone()))
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, format!("{} {}", ENTITY_OFFER, key)))?;

        tracing::debug!(offer_id = key, "Offer inserted");
        Ok(offer)
    }

    async fn update(&self, id: i32, offer: Offer) -> AppResult<Offer> {
        let key = offer.id;
        let result = OfferEntity::update_many()
            .set(ActiveModel::from(offer.clone()))
            .filter(offer::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, format!("{} {}", ENTITY_OFFER, key)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        if key != id {
            tracing::warn!(old_id = id, new_id = key, "Offer re-keyed by update");
        }

        Ok(offer)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = OfferEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
