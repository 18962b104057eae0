use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use crate::models::{Complaint, ComplaintStatus};
use crate::store::{Repository, StoreError};

use super::validation::Validator;
use super::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveComplaint {
    pub resolution: Option<String>,
}

#[derive(Clone)]
pub struct ComplaintService {
    complaints: Arc<dyn Repository<Complaint>>,
}

impl ComplaintService {
    pub fn new(complaints: Arc<dyn Repository<Complaint>>) -> Self {
        Self { complaints }
    }

    /// Every complaint, newest first.
    pub async fn list(&self) -> ServiceResult<Vec<Complaint>> {
        let mut complaints = self.complaints.all().await?;
        complaints.reverse();
        complaints.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(complaints)
    }

    /// Resolution is terminal: a resolved complaint cannot be resolved again.
    pub async fn resolve(&self, id: &str, input: ResolveComplaint) -> ServiceResult<Complaint> {
        let mut v = Validator::new();
        let resolution = v.required_text("resolution", input.resolution.as_deref(), 1);
        v.finish("Resolution text is required")?;

        let complaint = self
            .complaints
            .update(
                id,
                Box::new(move |complaint: &mut Complaint| {
                    if complaint.status == ComplaintStatus::Resolved {
                        return Err(StoreError::Conflict("Complaint is already resolved".to_string()));
                    }
                    complaint.status = ComplaintStatus::Resolved;
                    complaint.resolution = resolution;
                    complaint.resolved_at = Some(Utc::now());
                    Ok(())
                }),
            )
            .await?
            .ok_or_else(|| ServiceError::NotFound("Complaint not found".to_string()))?;

        tracing::info!("Complaint '{}' resolved", id);
        Ok(complaint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRepository;

    fn complaint(id: &str, status: ComplaintStatus) -> Complaint {
        Complaint {
            id: id.to_string(),
            user_id: "visitor-user-id".into(),
            institution_id: "inst-a".into(),
            title: "Long Wait Times".into(),
            description: "The queue was over an hour long.".into(),
            status,
            created_at: Utc::now(),
            resolution: None,
            resolved_at: None,
        }
    }

    fn service(records: Vec<Complaint>) -> ComplaintService {
        ComplaintService::new(Arc::new(MemoryRepository::with_records(records)))
    }

    fn resolution(text: &str) -> ResolveComplaint {
        ResolveComplaint {
            resolution: Some(text.to_string()),
        }
    }

    #[tokio::test]
    async fn resolve_records_text_and_time() {
        let service = service(vec![complaint("c1", ComplaintStatus::InReview)]);
        let resolved = service.resolve("c1", resolution("Added a second ticket desk.")).await.unwrap();

        assert_eq!(resolved.status, ComplaintStatus::Resolved);
        assert_eq!(resolved.resolution.as_deref(), Some("Added a second ticket desk."));
        assert!(resolved.resolved_at.is_some());
    }

    #[tokio::test]
    async fn empty_resolution_fails_and_leaves_status() {
        let service = service(vec![complaint("c1", ComplaintStatus::Pending)]);

        for text in ["", "   "] {
            let err = service.resolve("c1", resolution(text)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation { .. }));
        }
        let err = service.resolve("c1", ResolveComplaint::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));

        assert_eq!(service.list().await.unwrap()[0].status, ComplaintStatus::Pending);
    }

    #[tokio::test]
    async fn resolving_twice_is_a_conflict_and_keeps_the_first_resolution() {
        let service = service(vec![complaint("c1", ComplaintStatus::Pending)]);
        service.resolve("c1", resolution("First answer")).await.unwrap();

        let err = service.resolve("c1", resolution("Second answer")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Store(StoreError::Conflict(_))));
        assert_eq!(service.list().await.unwrap()[0].resolution.as_deref(), Some("First answer"));
    }

    #[tokio::test]
    async fn unknown_complaint_is_not_found() {
        let err = service(vec![]).resolve("missing", resolution("Done")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
