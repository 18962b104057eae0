use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::Announcement;
use crate::store::ScopedRepository;

use super::scoped::{delete_owned, find_owned, update_owned};
use super::validation::{Validator, MIN_ANNOUNCEMENT_CONTENT, MIN_ANNOUNCEMENT_TITLE};
use super::ServiceResult;

const LABEL: &str = "Announcement";

/// Body of both create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnouncementInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Clone)]
pub struct AnnouncementService {
    announcements: Arc<dyn ScopedRepository<Announcement>>,
}

impl AnnouncementService {
    pub fn new(announcements: Arc<dyn ScopedRepository<Announcement>>) -> Self {
        Self { announcements }
    }

    pub async fn list(&self, institution_id: &str) -> ServiceResult<Vec<Announcement>> {
        Ok(self.announcements.list_for(institution_id).await?)
    }

    pub async fn create(&self, institution_id: &str, input: AnnouncementInput) -> ServiceResult<Announcement> {
        let mut v = Validator::new();
        let title = v.required_text("title", input.title.as_deref(), MIN_ANNOUNCEMENT_TITLE);
        let content = v.required_text("content", input.content.as_deref(), MIN_ANNOUNCEMENT_CONTENT);
        v.finish("Title and content are required")?;

        let now = Utc::now();
        let announcement = Announcement {
            id: Uuid::new_v4().to_string(),
            institution_id: institution_id.to_string(),
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let announcement = self.announcements.insert(announcement).await?;
        tracing::info!("Announcement '{}' created for institution '{}'", announcement.id, institution_id);
        Ok(announcement)
    }

    /// Always refreshes `updatedAt`, even when no field changes.
    pub async fn update(
        &self,
        institution_id: &str,
        announcement_id: &str,
        input: AnnouncementInput,
    ) -> ServiceResult<Announcement> {
        find_owned(self.announcements.as_ref(), institution_id, announcement_id, LABEL).await?;

        let mut v = Validator::new();
        let title = v.optional_text("title", input.title.as_deref(), MIN_ANNOUNCEMENT_TITLE);
        let content = v.optional_text("content", input.content.as_deref(), MIN_ANNOUNCEMENT_CONTENT);
        v.finish("Invalid announcement fields")?;

        update_owned(
            self.announcements.as_ref(),
            announcement_id,
            LABEL,
            Box::new(move |announcement: &mut Announcement| {
                if let Some(title) = title {
                    announcement.title = title;
                }
                if let Some(content) = content {
                    announcement.content = content;
                }
                announcement.updated_at = Utc::now();
                Ok(())
            }),
        )
        .await
    }

    pub async fn delete(&self, institution_id: &str, announcement_id: &str) -> ServiceResult<()> {
        delete_owned(self.announcements.as_ref(), institution_id, announcement_id, LABEL).await?;
        tracing::info!("Announcement '{}' deleted from institution '{}'", announcement_id, institution_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;
    use crate::store::MemoryRepository;

    fn service() -> AnnouncementService {
        AnnouncementService::new(Arc::new(MemoryRepository::<Announcement>::new()))
    }

    fn input(title: &str, content: &str) -> AnnouncementInput {
        AnnouncementInput {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    #[tokio::test]
    async fn create_requires_minimum_content_length() {
        let err = service().create("inst-a", input("Hours", "short")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { ref field_errors, .. } if field_errors.contains_key("content")));
    }

    #[tokio::test]
    async fn update_refreshes_updated_at() {
        let service = service();
        let created = service
            .create("inst-a", input("Late opening", "Open until 22:00 on Fridays."))
            .await
            .unwrap();

        let updated = service
            .update(
                "inst-a",
                &created.id,
                AnnouncementInput {
                    title: Some("Late opening extended".into()),
                    content: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Late opening extended");
        assert_eq!(updated.content, created.content);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let service = service();
        let first = service.create("inst-a", input("First", "First announcement body")).await.unwrap();
        let second = service.create("inst-a", input("Second", "Second announcement body")).await.unwrap();

        let ids: Vec<String> = service.list("inst-a").await.unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn sibling_institution_cannot_delete() {
        let service = service();
        let created = service.create("inst-a", input("Closed", "Closed for maintenance")).await.unwrap();
        let err = service.delete("inst-b", &created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }
}
