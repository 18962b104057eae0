//! Who may act on behalf of an institution.

use crate::auth::Caller;
use crate::models::{InstitutionScoped, Role};

use super::{ServiceError, ServiceResult};

/// Decides whether a caller may act for an institution.
///
/// Must be cheap and side-effect free; it runs on every institution-scoped
/// request before any store access.
pub trait OwnershipResolver: Send + Sync {
    fn may_act_for(&self, caller: &Caller, institution_id: &str) -> bool;
}

/// One account per institution: the institution principal's id is the
/// institution's id. Admins may act for any institution.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralOwnership;

impl OwnershipResolver for StructuralOwnership {
    fn may_act_for(&self, caller: &Caller, institution_id: &str) -> bool {
        match caller.role {
            Role::Admin => true,
            Role::Institution => caller.id == institution_id,
            Role::User => false,
        }
    }
}

/// The record must belong to the institution named in the route.
///
/// Runs after the record was found, so an unknown id is reported as not
/// found before any ownership mismatch.
pub fn ensure_owned_by<T: InstitutionScoped>(record: &T, institution_id: &str, label: &str) -> ServiceResult<()> {
    if record.institution_id() == institution_id {
        Ok(())
    } else {
        tracing::warn!(
            "{} '{}' belongs to '{}', not '{}'",
            label,
            record.id(),
            record.institution_id(),
            institution_id
        );
        Err(ServiceError::Forbidden(format!(
            "Forbidden: {label} does not belong to this institution."
        )))
    }
}
