use async_trait::async_trait;

use super::StoreResult;
use crate::models::{Entity, InstitutionScoped, Principal};

/// Read-modify-write step applied under the collection's write lock.
///
/// If it returns an error the stored record is left untouched.
pub type Mutation<T> = Box<dyn FnOnce(&mut T) -> StoreResult<()> + Send>;

#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every record, in insertion order.
    async fn all(&self) -> StoreResult<Vec<T>>;

    async fn find(&self, id: &str) -> StoreResult<Option<T>>;

    async fn insert(&self, record: T) -> StoreResult<T>;

    /// Returns the updated record, or `None` when `id` is unknown.
    async fn update(&self, id: &str, mutation: Mutation<T>) -> StoreResult<Option<T>>;

    /// Returns the removed record, or `None` when `id` is unknown.
    async fn remove(&self, id: &str) -> StoreResult<Option<T>>;

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.all().await?.len())
    }
}

#[async_trait]
pub trait ScopedRepository<T: InstitutionScoped>: Repository<T> {
    /// Records owned by `institution_id`, newest first.
    async fn list_for(&self, institution_id: &str) -> StoreResult<Vec<T>>;
}

#[async_trait]
pub trait PrincipalRepository: Repository<Principal> {
    /// Exact, case-sensitive match.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Principal>>;
}
