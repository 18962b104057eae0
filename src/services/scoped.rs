//! Ownership-checked access shared by tickets and announcements.

use crate::models::InstitutionScoped;
use crate::store::{Mutation, ScopedRepository};

use super::ownership::ensure_owned_by;
use super::{ServiceError, ServiceResult};

/// Look the record up by its own id, then require it to belong to
/// `institution_id`.
pub async fn find_owned<T: InstitutionScoped>(
    repo: &dyn ScopedRepository<T>,
    institution_id: &str,
    id: &str,
    label: &str,
) -> ServiceResult<T> {
    let record = repo
        .find(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("{label} not found")))?;
    ensure_owned_by(&record, institution_id, label)?;
    Ok(record)
}

/// Apply `mutation` to a record already checked with [`find_owned`].
///
/// `institution_id` never changes after creation, so that check still
/// holds when the write lock is taken.
pub async fn update_owned<T: InstitutionScoped>(
    repo: &dyn ScopedRepository<T>,
    id: &str,
    label: &str,
    mutation: Mutation<T>,
) -> ServiceResult<T> {
    repo.update(id, mutation)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("{label} not found")))
}

pub async fn delete_owned<T: InstitutionScoped>(
    repo: &dyn ScopedRepository<T>,
    institution_id: &str,
    id: &str,
    label: &str,
) -> ServiceResult<T> {
    find_owned(repo, institution_id, id, label).await?;
    repo.remove(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("{label} not found")))
}
