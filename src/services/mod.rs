//! Domain operations. Services assume the caller already passed the
//! route-level guard; they enforce everything that depends on stored state.

pub mod announcement_service;
pub mod complaint_service;
pub mod institution_service;
pub mod ownership;
pub mod scoped;
pub mod session_service;
pub mod stats_service;
pub mod ticket_service;
pub mod validation;

pub use announcement_service::AnnouncementService;
pub use complaint_service::ComplaintService;
pub use institution_service::InstitutionService;
pub use ownership::{OwnershipResolver, StructuralOwnership};
pub use session_service::SessionService;
pub use stats_service::StatsService;
pub use ticket_service::TicketService;

use crate::error::FieldErrors;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{message}")]
    Validation {
        message: String,
        field_errors: FieldErrors,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
