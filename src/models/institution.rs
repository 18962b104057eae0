use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstitutionStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub is_open: bool,
    /// `HH:MM`, 24 hour clock.
    pub open_time: String,
    pub close_time: String,
}

impl DaySchedule {
    pub fn open(open_time: &str, close_time: &str) -> Self {
        Self {
            is_open: true,
            open_time: open_time.to_string(),
            close_time: close_time.to_string(),
        }
    }

    pub fn closed(open_time: &str, close_time: &str) -> Self {
        Self {
            is_open: false,
            ..Self::open(open_time, close_time)
        }
    }
}

/// Weekly opening hours. A day left unset has no published schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DaySchedule>,
}

impl WorkingHours {
    /// Same schedule every day of the week.
    pub fn uniform(day: DaySchedule) -> Self {
        Self {
            monday: Some(day.clone()),
            tuesday: Some(day.clone()),
            wednesday: Some(day.clone()),
            thursday: Some(day.clone()),
            friday: Some(day.clone()),
            saturday: Some(day.clone()),
            sunday: Some(day),
        }
    }

    pub fn days(&self) -> [(&'static str, Option<&DaySchedule>); 7] {
        [
            ("monday", self.monday.as_ref()),
            ("tuesday", self.tuesday.as_ref()),
            ("wednesday", self.wednesday.as_ref()),
            ("thursday", self.thursday.as_ref()),
            ("friday", self.friday.as_ref()),
            ("saturday", self.saturday.as_ref()),
            ("sunday", self.sunday.as_ref()),
        ]
    }

    /// Overlay every day set in `other`, keeping the rest.
    pub fn merge(&mut self, other: WorkingHours) {
        let WorkingHours { monday, tuesday, wednesday, thursday, friday, saturday, sunday } = other;
        for (slot, day) in [
            (&mut self.monday, monday),
            (&mut self.tuesday, tuesday),
            (&mut self.wednesday, wednesday),
            (&mut self.thursday, thursday),
            (&mut self.friday, friday),
            (&mut self.saturday, saturday),
            (&mut self.sunday, sunday),
        ] {
            if day.is_some() {
                *slot = day;
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    /// Also the id of the owning principal.
    pub id: String,
    pub name: String,
    pub description: String,
    pub city: String,
    pub location: Location,
    pub entry_fee: f64,
    pub status: InstitutionStatus,
    /// Mirrors `status == Verified`; only [`Institution::set_status`] writes either.
    pub is_verified: bool,
    pub registration_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_date: Option<DateTime<Utc>>,
    pub creation_date: DateTime<Utc>,
    pub rating: f64,
    pub total_visitors: u64,
    pub working_hours: WorkingHours,
    pub images: Vec<String>,
}

impl Institution {
    pub fn set_status(&mut self, status: InstitutionStatus) {
        self.status = status;
        self.is_verified = status == InstitutionStatus::Verified;
    }
}

impl Entity for Institution {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_working_hours_round_trip_as_empty_object() {
        let hours: WorkingHours = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(hours, WorkingHours::default());
        assert_eq!(serde_json::to_value(&hours).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn merge_only_replaces_days_that_are_set() {
        let mut hours = WorkingHours::uniform(DaySchedule::open("09:00", "17:00"));
        hours.merge(WorkingHours {
            sunday: Some(DaySchedule::closed("09:00", "13:00")),
            ..Default::default()
        });

        assert_eq!(hours.monday, Some(DaySchedule::open("09:00", "17:00")));
        assert_eq!(hours.sunday.as_ref().map(|d| d.is_open), Some(false));
    }
}
