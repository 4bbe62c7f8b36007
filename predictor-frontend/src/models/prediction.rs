//! Wire types exchanged with the prediction API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Feature snapshot sent to `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    #[serde(rename = "dayOfWeek")]
    #[validate(range(min = 0, max = 6))]
    pub day_of_week: i64,
    #[serde(rename = "hourOfDay")]
    #[validate(range(min = 0, max = 23))]
    pub hour_of_day: i64,
    #[serde(rename = "minuteOfHour")]
    #[validate(range(min = 0, max = 59))]
    pub minute_of_hour: i64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub device_activity: f64,
    #[serde(rename = "device_batteryLevel")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub device_battery_level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PredictionResponse {
    /// Prediction rendered the way the result panel shows it.
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.prediction)
    }
}

/// Body of a non-2xx response from the prediction API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /health` body. Both fields are read best-effort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_available: Option<bool>,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }

    pub fn model_available(&self) -> bool {
        self.model_available.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(rename = "type")]
    pub model_type: String,
    pub size_bytes: u64,
    pub last_modified: f64,
}

/// `GET /model_info` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub available_models: Vec<ModelArtifact>,
    #[serde(default)]
    pub latest_update: Option<f64>,
}
