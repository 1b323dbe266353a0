//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::ENTITY_USER;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user in storage order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn get(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a user with a caller-supplied ID
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Replace every field of the user at `id`, including the ID itself
    async fn update(&self, id: i32, user: User) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        let key = user.id;
        UserEntity::insert(ActiveModel::from(user.clone()))
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, format!("{} {}", ENTITY_USER, key)))?;

        tracing::debug!(user_id = key, "User inserted");
        Ok(user)
    }

    async fn update(&self, id: i32, user: User) -> AppResult<User> {
        let key = user.id;
        let result = UserEntity::update_many()
            .set(ActiveModel::from(user.clone()))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, format!("{} {}", ENTITY_USER, key)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        if key != id {
            tracing::warn!(old_id = id, new_id = key, "User re-keyed by update");
        }

        Ok(user)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
