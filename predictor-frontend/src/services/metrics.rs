//! Prometheus metrics for predictor-frontend.

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder. Call once at startup.
pub fn init_metrics() -> Result<(), BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    if METRICS_HANDLE.set(handle).is_err() {
        tracing::warn!("Metrics recorder already initialized");
    }

    Ok(())
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record the outcome of one form submission.
pub fn record_prediction(outcome: &'static str) {
    counter!("prediction_requests_total", "outcome" => outcome).increment(1);
}

/// Record the indicator state produced by one health check.
pub fn record_health_check(state: &'static str) {
    counter!("health_checks_total", "state" => state).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_metrics_without_recorder() {
        assert_eq!(get_metrics(), "# Metrics recorder not initialized\n");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_prediction("success");
        record_health_check("offline");
    }
}
