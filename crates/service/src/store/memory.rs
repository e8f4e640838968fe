use std::collections::BTreeMap;

use async_trait::async_trait;
use models::store::{self, NewStore};
use tokio::sync::RwLock;

use super::repository::StoreRepository;
use crate::errors::ServiceError;

/// In-memory store table for tests and local demos.
///
/// Ids are handed out from a counter that only moves forward, like an
/// auto-increment column: deleted ids are never reused.
pub struct InMemoryStoreRepository {
    inner: RwLock<Table>,
}

struct Table {
    rows: BTreeMap<i32, store::Model>,
    next_id: i32,
}

impl Default for InMemoryStoreRepository {
    fn default() -> Self {
        Self { inner: RwLock::new(Table { rows: BTreeMap::new(), next_id: 1 }) }
    }
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing rows; the counter continues after the largest id.
    pub fn with_stores<I>(stores: I) -> Self
    where
        I: IntoIterator<Item = store::Model>,
    {
        let rows: BTreeMap<i32, store::Model> = stores.into_iter().map(|s| (s.id, s)).collect();
        let next_id = rows.keys().next_back().map_or(1, |max| max + 1);
        Self { inner: RwLock::new(Table { rows, next_id }) }
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn list(&self) -> Result<Vec<store::Model>, ServiceError> {
        let table = self.inner.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<store::Model>, ServiceError> {
        let table = self.inner.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, input: NewStore) -> Result<store::Model, ServiceError> {
        let mut table = self.inner.write().await;
        let id = table.next_id;
        table.next_id += 1;
        let created = input.with_id(id);
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, store: store::Model) -> Result<Option<store::Model>, ServiceError> {
        let mut table = self.inner.write().await;
        match table.rows.get_mut(&store.id) {
            Some(row) => {
                *row = store.clone();
                Ok(Some(store))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut table = self.inner.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> NewStore {
        NewStore { name: name.into(), ..NewStore::default() }
    }

    #[tokio::test]
    async fn ids_start_at_one_and_are_not_reused() {
        let repo = InMemoryStoreRepository::new();
        let a = repo.create(named("a")).await.unwrap();
        assert_eq!(a.id, 1);
        assert!(repo.delete(a.id).await.unwrap());
        let b = repo.create(named("b")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn seeded_counter_follows_largest_id() {
        let repo = InMemoryStoreRepository::with_stores([named("five").with_id(5), named("seven").with_id(7)]);
        let next = repo.create(named("eight")).await.unwrap();
        assert_eq!(next.id, 8);

        let ids: Vec<i32> = repo.list().await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![5, 7, 8]);
    }

    #[tokio::test]
    async fn update_only_touches_existing_rows() {
        let repo = InMemoryStoreRepository::with_stores([named("old").with_id(3)]);
        let updated = repo.update(named("new").with_id(3)).await.unwrap();
        assert_eq!(updated.map(|s| s.name), Some("new".to_string()));
        assert!(repo.update(named("nope").with_id(4)).await.unwrap().is_none());
        assert!(repo.get(4).await.unwrap().is_none());
    }
}
