use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use crate::models::{Institution, InstitutionStatus, WorkingHours};
use crate::store::Repository;

use super::validation::{NumberInput, Validator, MIN_ADDRESS, MIN_INSTITUTION_DESCRIPTION, MIN_INSTITUTION_NAME};
use super::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Profile fields an owner may edit. Anything else in the payload,
/// including `id` and verification state, is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub entry_fee: Option<NumberInput>,
    pub location: Option<LocationUpdate>,
    pub working_hours: Option<WorkingHours>,
}

#[derive(Clone)]
pub struct InstitutionService {
    institutions: Arc<dyn Repository<Institution>>,
}

impl InstitutionService {
    pub fn new(institutions: Arc<dyn Repository<Institution>>) -> Self {
        Self { institutions }
    }

    pub async fn get(&self, id: &str) -> ServiceResult<Institution> {
        self.institutions.find(id).await?.ok_or_else(not_found)
    }

    pub async fn list_verified(&self) -> ServiceResult<Vec<Institution>> {
        Ok(self
            .institutions
            .all()
            .await?
            .into_iter()
            .filter(|i| i.is_verified && i.status == InstitutionStatus::Verified)
            .collect())
    }

    pub async fn list_pending(&self) -> ServiceResult<Vec<Institution>> {
        Ok(self
            .institutions
            .all()
            .await?
            .into_iter()
            .filter(|i| i.status == InstitutionStatus::Pending)
            .collect())
    }

    /// Verify an institution. Allowed from any state; approving an already
    /// verified institution keeps its original acceptance date.
    pub async fn approve(&self, id: &str) -> ServiceResult<Institution> {
        let institution = self
            .institutions
            .update(
                id,
                Box::new(|institution: &mut Institution| {
                    if institution.status != InstitutionStatus::Verified {
                        institution.set_status(InstitutionStatus::Verified);
                        institution.acceptance_date = Some(Utc::now());
                    }
                    Ok(())
                }),
            )
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Institution '{}' approved", id);
        Ok(institution)
    }

    /// Reject an institution. Allowed from any state and clears the
    /// acceptance date.
    pub async fn reject(&self, id: &str) -> ServiceResult<Institution> {
        let institution = self
            .institutions
            .update(
                id,
                Box::new(|institution: &mut Institution| {
                    institution.set_status(InstitutionStatus::Rejected);
                    institution.acceptance_date = None;
                    Ok(())
                }),
            )
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Institution '{}' rejected", id);
        Ok(institution)
    }

    /// Unknown ids are reported before any field errors.
    pub async fn update_profile(&self, id: &str, input: InstitutionUpdate) -> ServiceResult<Institution> {
        self.get(id).await?;

        let mut v = Validator::new();
        let name = v.optional_text("name", input.name.as_deref(), MIN_INSTITUTION_NAME);
        let description = v.optional_text("description", input.description.as_deref(), MIN_INSTITUTION_DESCRIPTION);
        let entry_fee = v.optional_amount("entryFee", input.entry_fee.as_ref());
        let location = input.location.unwrap_or_default();
        let address = v.optional_text("location.address", location.address.as_deref(), MIN_ADDRESS);
        let latitude = v.coordinate("location.latitude", location.latitude, 90.0);
        let longitude = v.coordinate("location.longitude", location.longitude, 180.0);
        if let Some(hours) = &input.working_hours {
            v.working_hours("workingHours", hours);
        }
        v.finish("Invalid institution fields")?;

        let working_hours = input.working_hours;
        let institution = self
            .institutions
            .update(
                id,
                Box::new(move |institution: &mut Institution| {
                    if let Some(name) = name {
                        institution.name = name;
                    }
                    if let Some(description) = description {
                        institution.description = description;
                    }
                    if let Some(entry_fee) = entry_fee {
                        institution.entry_fee = entry_fee;
                    }
                    if let Some(address) = address {
                        institution.location.address = address;
                    }
                    if let Some(latitude) = latitude {
                        institution.location.latitude = latitude;
                    }
                    if let Some(longitude) = longitude {
                        institution.location.longitude = longitude;
                    }
                    if let Some(hours) = working_hours {
                        institution.working_hours.merge(hours);
                    }
                    Ok(())
                }),
            )
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Institution '{}' profile updated", id);
        Ok(institution)
    }
}

fn not_found() -> ServiceError {
    ServiceError::NotFound("Institution not found".to_string())
}
