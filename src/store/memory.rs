use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repository::{Mutation, PrincipalRepository, Repository, ScopedRepository};
use super::{StoreError, StoreResult};
use crate::models::{Entity, InstitutionScoped, Principal};

/// Vec-backed collection guarded by a single lock.
///
/// Contents are lost when the process exits.
pub struct MemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn all(&self) -> StoreResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn find(&self, id: &str) -> StoreResult<Option<T>> {
        Ok(self.records.read().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, record: T) -> StoreResult<T> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, mutation: Mutation<T>) -> StoreResult<Option<T>> {
        let mut records = self.records.write().await;
        let Some(slot) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };

        let mut next = slot.clone();
        mutation(&mut next)?;
        *slot = next.clone();
        Ok(Some(next))
    }

    async fn remove(&self, id: &str) -> StoreResult<Option<T>> {
        let mut records = self.records.write().await;
        Ok(records
            .iter()
            .position(|r| r.id() == id)
            .map(|index| records.remove(index)))
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.records.read().await.len())
    }
}

#[async_trait]
impl<T: InstitutionScoped> ScopedRepository<T> for MemoryRepository<T> {
    async fn list_for(&self, institution_id: &str) -> StoreResult<Vec<T>> {
        // Reverse first so the stable sort leaves later inserts ahead on ties.
        let mut owned: Vec<T> = self
            .records
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.institution_id() == institution_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(owned)
    }
}

#[async_trait]
impl PrincipalRepository for MemoryRepository<Principal> {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Principal>> {
        Ok(self.records.read().await.iter().find(|p| p.email == email).cloned())
    }
}
