use crate::services::{HealthReport, PredictorError};
use crate::view::{IndicatorClass, StatusIndicator};

/// What one `/health` call says about the prediction API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    /// 2xx, `status == "ok"`, model loaded.
    Ready,
    /// 2xx, `status == "ok"`, no model loaded.
    ModelUnavailable,
    /// Reachable, but non-2xx or `status != "ok"`.
    Unhealthy,
    /// Request failed or the body was not JSON.
    Offline,
}

impl HealthState {
    pub fn classify(result: &Result<HealthReport, PredictorError>) -> Self {
        match result {
            Ok(report) if report.http_ok() && report.body.is_ok() => {
                if report.body.model_available() {
                    HealthState::Ready
                } else {
                    HealthState::ModelUnavailable
                }
            }
            Ok(_) => HealthState::Unhealthy,
            Err(_) => HealthState::Offline,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            HealthState::Ready => "API Online - Model Ready",
            HealthState::ModelUnavailable => "API Online - Model Not Available",
            HealthState::Unhealthy => "API Issues Detected",
            HealthState::Offline => "API Offline",
        }
    }

    // ModelUnavailable carries both classes; the page has always rendered it that way.
    pub fn classes(&self) -> &'static [IndicatorClass] {
        match self {
            HealthState::Ready => &[IndicatorClass::Online],
            HealthState::ModelUnavailable => &[IndicatorClass::Online, IndicatorClass::Offline],
            HealthState::Unhealthy | HealthState::Offline => &[IndicatorClass::Offline],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Ready => "ready",
            HealthState::ModelUnavailable => "model_unavailable",
            HealthState::Unhealthy => "unhealthy",
            HealthState::Offline => "offline",
        }
    }

    pub fn apply(&self, indicator: &mut StatusIndicator) {
        for class in self.classes() {
            indicator.mark(*class);
        }
        indicator.set_text(self.text());
    }
}
