use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, InstitutionScoped};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub institution_id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for Ticket {
    fn id(&self) -> &str {
        &self.id
    }
}

impl InstitutionScoped for Ticket {
    fn institution_id(&self) -> &str {
        &self.institution_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
