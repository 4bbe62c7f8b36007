//! Raw form submission and its conversion into a typed request.

use crate::models::prediction::PredictionRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Field values exactly as the browser posted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    #[serde(rename = "dayOfWeek", default)]
    pub day_of_week: String,
    #[serde(rename = "hourOfDay", default)]
    pub hour_of_day: String,
    #[serde(rename = "minuteOfHour", default)]
    pub minute_of_hour: String,
    #[serde(default)]
    pub device_activity: String,
    #[serde(rename = "device_batteryLevel", default)]
    pub device_battery_level: String,
    /// Value the result panel showed when the form was posted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_prediction: Option<String>,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            day_of_week: "0".to_string(),
            hour_of_day: "12".to_string(),
            minute_of_hour: "0".to_string(),
            device_activity: "0.5".to_string(),
            device_battery_level: "0.5".to_string(),
            last_prediction: None,
        }
    }
}

impl PredictionForm {
    /// The previously shown prediction, if the posted value is a number.
    pub fn previous_result(&self) -> Option<String> {
        let value = self.last_prediction.as_deref()?.trim().parse::<f64>().ok()?;
        value.is_finite().then(|| format!("{:.2}", value))
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("Values out of range: {0}")]
    OutOfRange(#[from] validator::ValidationErrors),
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, FormError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| FormError::NotAnInteger {
            field,
            value: value.to_string(),
        })
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, FormError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FormError::NotANumber {
            field,
            value: value.to_string(),
        })
}

impl TryFrom<&PredictionForm> for PredictionRequest {
    type Error = FormError;

    fn try_from(form: &PredictionForm) -> Result<Self, Self::Error> {
        let request = PredictionRequest {
            day_of_week: parse_int("dayOfWeek", &form.day_of_week)?,
            hour_of_day: parse_int("hourOfDay", &form.hour_of_day)?,
            minute_of_hour: parse_int("minuteOfHour", &form.minute_of_hour)?,
            device_activity: parse_float("device_activity", &form.device_activity)?,
            device_battery_level: parse_float("device_batteryLevel", &form.device_battery_level)?,
        };
        request.validate()?;
        Ok(request)
    }
}
