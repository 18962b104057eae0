//! Field checks for request payloads. Limits match the dashboard forms.

use chrono::NaiveTime;
use serde::Deserialize;

use crate::error::FieldErrors;
use crate::models::WorkingHours;

use super::{ServiceError, ServiceResult};

pub const MIN_TICKET_NAME: usize = 3;
pub const MIN_TICKET_DESCRIPTION: usize = 10;
pub const MIN_ANNOUNCEMENT_TITLE: usize = 3;
pub const MIN_ANNOUNCEMENT_CONTENT: usize = 10;
pub const MIN_INSTITUTION_NAME: usize = 3;
pub const MIN_INSTITUTION_DESCRIPTION: usize = 20;
pub const MIN_ADDRESS: usize = 5;

/// A number as sent by a form: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

/// Collects every field problem before failing, so the client can show
/// them all at once.
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.entry(field.to_string()).or_insert_with(|| message.into());
    }

    /// Trimmed text of at least `min_chars` characters; missing counts as blank.
    pub fn required_text(&mut self, field: &str, value: Option<&str>, min_chars: usize) -> Option<String> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => {
                self.reject(field, format!("{field} is required"));
                None
            }
            Some(v) => self.text_with_min(field, v, min_chars),
        }
    }

    /// Like [`Validator::required_text`], but absence is fine.
    pub fn optional_text(&mut self, field: &str, value: Option<&str>, min_chars: usize) -> Option<String> {
        match value {
            None => None,
            Some(v) => self.required_text(field, Some(v), min_chars),
        }
    }

    fn text_with_min(&mut self, field: &str, value: &str, min_chars: usize) -> Option<String> {
        if value.chars().count() < min_chars {
            self.reject(field, format!("{field} must be at least {min_chars} characters"));
            return None;
        }
        Some(value.to_string())
    }

    pub fn required_amount(&mut self, field: &str, value: Option<&NumberInput>) -> Option<f64> {
        match value {
            None => {
                self.reject(field, format!("{field} is required"));
                None
            }
            Some(v) => self.amount(field, v),
        }
    }

    pub fn optional_amount(&mut self, field: &str, value: Option<&NumberInput>) -> Option<f64> {
        value.and_then(|v| self.amount(field, v))
    }

    fn amount(&mut self, field: &str, value: &NumberInput) -> Option<f64> {
        match value.parse() {
            None => {
                self.reject(field, format!("{field} must be a number"));
                None
            }
            Some(n) if n < 0.0 => {
                self.reject(field, format!("{field} cannot be negative"));
                None
            }
            Some(n) => Some(n),
        }
    }

    pub fn coordinate(&mut self, field: &str, value: Option<f64>, bound: f64) -> Option<f64> {
        let v = value?;
        if !v.is_finite() || v.abs() > bound {
            self.reject(field, format!("{field} must be between -{bound} and {bound}"));
            return None;
        }
        Some(v)
    }

    pub fn working_hours(&mut self, field: &str, hours: &WorkingHours) {
        for (day, schedule) in hours.days() {
            let Some(schedule) = schedule else { continue };
            for (which, time) in [("openTime", &schedule.open_time), ("closeTime", &schedule.close_time)] {
                if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                    self.reject(&format!("{field}.{day}.{which}"), "Invalid time format");
                }
            }
        }
    }

    pub fn finish(self, message: &str) -> ServiceResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation {
                message: message.to_string(),
                field_errors: self.errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DaySchedule;

    #[test]
    fn number_input_accepts_numbers_and_numeric_strings() {
        assert_eq!(NumberInput::Number(12.0).parse(), Some(12.0));
        assert_eq!(NumberInput::Text(" 7.5 ".into()).parse(), Some(7.5));
        assert_eq!(NumberInput::Text("twelve".into()).parse(), None);
        assert_eq!(NumberInput::Text("NaN".into()).parse(), None);
    }

    #[test]
    fn number_input_deserializes_untagged() {
        let n: NumberInput = serde_json::from_value(serde_json::json!(12)).unwrap();
        let s: NumberInput = serde_json::from_value(serde_json::json!("12")).unwrap();
        assert_eq!(n.parse(), s.parse());
    }

    #[test]
    fn required_text_rejects_blank_and_short_values() {
        let mut v = Validator::new();
        assert_eq!(v.required_text("name", Some("   "), 3), None);
        assert_eq!(v.required_text("title", Some("ab"), 3), None);
        assert_eq!(v.required_text("content", None, 3), None);
        assert_eq!(v.required_text("city", Some("  Tunis "), 3), Some("Tunis".to_string()));

        let err = v.finish("Invalid").unwrap_err();
        let ServiceError::Validation { field_errors, .. } = err else {
            panic!("expected validation error");
        };
        assert_eq!(field_errors.len(), 3);
        assert!(field_errors["title"].contains("at least 3"));
    }

    #[test]
    fn negative_and_missing_amounts_fail() {
        let mut v = Validator::new();
        assert_eq!(v.required_amount("price", Some(&NumberInput::Number(-1.0))), None);
        assert_eq!(v.required_amount("fee", None), None);
        assert_eq!(v.required_amount("zero", Some(&NumberInput::Number(0.0))), Some(0.0));
        assert!(v.finish("Invalid").is_err());
    }

    #[test]
    fn working_hours_reject_bad_times() {
        let mut hours = WorkingHours::default();
        hours.friday = Some(DaySchedule::open("9am", "17:00"));
        let mut v = Validator::new();
        v.working_hours("workingHours", &hours);

        let ServiceError::Validation { field_errors, .. } = v.finish("Invalid").unwrap_err() else {
            panic!("expected validation error");
        };
        assert!(field_errors.contains_key("workingHours.friday.openTime"));
    }
}
