//! Resource stores.
//!
//! Handlers and services only see the repository traits; [`Store::seeded`]
//! wires the in-memory implementation that backs the running server.

pub mod memory;
pub mod repository;
pub mod seed;

use std::sync::Arc;

use crate::models::{Announcement, Complaint, Institution, Ticket};

pub use memory::MemoryRepository;
pub use repository::{Mutation, PrincipalRepository, Repository, ScopedRepository};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record '{0}' already exists")]
    DuplicateId(String),
    /// A mutation refused to apply because the record is in the wrong state.
    #[error("{0}")]
    Conflict(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One repository per resource kind.
#[derive(Clone)]
pub struct Store {
    pub principals: Arc<dyn PrincipalRepository>,
    pub institutions: Arc<dyn Repository<Institution>>,
    pub tickets: Arc<dyn ScopedRepository<Ticket>>,
    pub announcements: Arc<dyn ScopedRepository<Announcement>>,
    pub complaints: Arc<dyn Repository<Complaint>>,
}

impl Store {
    /// Empty in-memory collections.
    pub fn in_memory() -> Self {
        Self {
            principals: Arc::new(MemoryRepository::new()),
            institutions: Arc::new(MemoryRepository::new()),
            tickets: Arc::new(MemoryRepository::new()),
            announcements: Arc::new(MemoryRepository::new()),
            complaints: Arc::new(MemoryRepository::new()),
        }
    }

    /// In-memory collections holding the demo data set.
    pub fn seeded(pepper: Option<&str>) -> Result<Self, crate::auth::AuthError> {
        let data = seed::SeedData::build(pepper)?;
        Ok(Self {
            principals: Arc::new(MemoryRepository::with_records(data.principals)),
            institutions: Arc::new(MemoryRepository::with_records(data.institutions)),
            tickets: Arc::new(MemoryRepository::with_records(data.tickets)),
            announcements: Arc::new(MemoryRepository::with_records(data.announcements)),
            complaints: Arc::new(MemoryRepository::with_records(data.complaints)),
        })
    }
}
