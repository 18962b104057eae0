//! Domain records shared by the store, services, and handlers.
//!
//! Every record serializes in camelCase to match the dashboard client.

pub mod announcement;
pub mod complaint;
pub mod institution;
pub mod principal;
pub mod stats;
pub mod ticket;

pub use announcement::Announcement;
pub use complaint::{Complaint, ComplaintStatus};
pub use institution::{DaySchedule, Institution, InstitutionStatus, Location, WorkingHours};
pub use principal::{Principal, Role};
pub use stats::{AdminStats, InstitutionStats};
pub use ticket::Ticket;

use chrono::{DateTime, Utc};

/// A record addressable by its own string id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// A record owned by exactly one institution.
///
/// `institution_id` is fixed at creation; nothing in the crate rewrites it.
pub trait InstitutionScoped: Entity {
    fn institution_id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}
