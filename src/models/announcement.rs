use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, InstitutionScoped};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub institution_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Announcement {
    fn id(&self) -> &str {
        &self.id
    }
}

impl InstitutionScoped for Announcement {
    fn institution_id(&self) -> &str {
        &self.institution_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
