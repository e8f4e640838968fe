use std::sync::Arc;

use models::store::{self, NewStore};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::store::repository::StoreRepository;

/// Application service for the store resource.
///
/// Stateless apart from the repository handle, so one instance is shared by
/// every request.
pub struct StoreService {
    repo: Arc<dyn StoreRepository>,
}

impl StoreService {
    pub fn new(repo: Arc<dyn StoreRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<store::Model>, ServiceError> {
        let stores = self.repo.list().await?;
        debug!(count = stores.len(), "listed stores");
        Ok(stores)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<store::Model>, ServiceError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewStore) -> Result<store::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "store created");
        Ok(created)
    }

    /// Replace every field of an existing store. Fails with `NotFound` when
    /// no row has `store.id`.
    #[instrument(skip(self, store), fields(id = store.id))]
    pub async fn update(&self, store: store::Model) -> Result<store::Model, ServiceError> {
        let updated = self
            .repo
            .update(store)
            .await?
            .ok_or_else(|| ServiceError::not_found("store"))?;
        info!(id = updated.id, "store updated");
        Ok(updated)
    }

    /// Returns false when the row was already gone.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let removed = self.repo.delete(id).await?;
        if removed {
            info!(id, "store deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStoreRepository;

    fn service() -> StoreService {
        StoreService::new(Arc::new(InMemoryStoreRepository::new()))
    }

    #[tokio::test]
    async fn create_then_get_round_trips() -> Result<(), ServiceError> {
        let svc = service();
        let created = svc.create(NewStore { name: "A".into(), ..NewStore::default() }).await?;
        assert_eq!(svc.get_by_id(created.id).await?, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_store_is_not_found() {
        let svc = service();
        let ghost = NewStore { name: "B".into(), ..NewStore::default() }.with_id(5);
        let err = svc.update(ghost).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_row_existed() -> Result<(), ServiceError> {
        let svc = service();
        let created = svc.create(NewStore { name: "C".into(), ..NewStore::default() }).await?;
        assert!(svc.delete(created.id).await?);
        assert!(!svc.delete(created.id).await?);
        Ok(())
    }
}
