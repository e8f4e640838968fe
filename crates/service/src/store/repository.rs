use async_trait::async_trait;
use models::store::{self, NewStore};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Persistence contract for stores, keyed by integer id.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Every store, ascending by id.
    async fn list(&self) -> Result<Vec<store::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<store::Model>, ServiceError>;
    /// Insert and return the row with its assigned id.
    async fn create(&self, input: NewStore) -> Result<store::Model, ServiceError>;
    /// Replace the row with `store.id` atomically; `None` when no row matched.
    async fn update(&self, store: store::Model) -> Result<Option<store::Model>, ServiceError>;
    /// True when a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmStoreRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl StoreRepository for SeaOrmStoreRepository {
    async fn list(&self) -> Result<Vec<store::Model>, ServiceError> {
        Ok(store::list(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<store::Model>, ServiceError> {
        Ok(store::find(&self.db, id).await?)
    }

    async fn create(&self, input: NewStore) -> Result<store::Model, ServiceError> {
        Ok(store::create(&self.db, input).await?)
    }

    async fn update(&self, store: store::Model) -> Result<Option<store::Model>, ServiceError> {
        Ok(store::update_by_id(&self.db, store).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(store::delete_by_id(&self.db, id).await?)
    }
}
