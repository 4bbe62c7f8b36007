//! The prediction form's behaviour: submission and the API status check.

pub mod health;

pub use health::HealthState;

use crate::models::{FormError, PredictionForm, PredictionRequest, PredictionResponse};
use crate::services::{self, PredictorApi, PredictorError};
use crate::view::{PredictionPage, StatusIndicator, SubmissionView};

pub const GENERIC_FAILURE_ALERT: &str = "Failed to get prediction. Please try again.";

/// How a submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Prediction shown in the result panel.
    Displayed(String),
    /// Form values did not parse; nothing was sent.
    Invalid,
    /// The API answered with an error status.
    ApiError,
    /// Transport or decode failure.
    Failed,
}

impl SubmitOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            SubmitOutcome::Displayed(_) => "success",
            SubmitOutcome::Invalid => "invalid",
            SubmitOutcome::ApiError => "api_error",
            SubmitOutcome::Failed => "failed",
        }
    }
}

enum SubmitError {
    Form(FormError),
    Predictor(PredictorError),
}

pub struct PredictionFormController<'a> {
    api: &'a dyn PredictorApi,
}

impl<'a> PredictionFormController<'a> {
    pub fn new(api: &'a dyn PredictorApi) -> Self {
        Self { api }
    }

    /// Submit the current form values and project the outcome onto the view.
    ///
    /// The submit button is disabled for the duration of the call and
    /// restored before this returns, whatever the outcome. A failed
    /// submission leaves the result panel exactly as it was.
    pub async fn submit(&self, view: &mut SubmissionView) -> SubmitOutcome {
        let SubmissionView {
            form,
            result,
            alerts,
        } = view;

        let snapshot = form.snapshot();
        let response = {
            let _busy = form.submit.engage();
            self.request_prediction(&snapshot).await
        };

        let outcome = match response {
            Ok(prediction) => {
                let value = prediction.display_value();
                result.show(value.clone());
                SubmitOutcome::Displayed(value)
            }
            Err(SubmitError::Form(e)) => {
                tracing::info!(error = %e, "Rejected prediction form");
                alerts.alert(format!("Invalid input: {}", e));
                SubmitOutcome::Invalid
            }
            Err(SubmitError::Predictor(PredictorError::Api { status, message })) => {
                tracing::warn!(status, message = ?message, "Prediction API returned an error");
                alerts.alert(format!(
                    "Error: {}",
                    message.as_deref().unwrap_or("Unknown error")
                ));
                SubmitOutcome::ApiError
            }
            Err(SubmitError::Predictor(e)) => {
                tracing::error!(error = %e, "Error making prediction");
                alerts.alert(GENERIC_FAILURE_ALERT);
                SubmitOutcome::Failed
            }
        };

        services::record_prediction(outcome.as_str());
        outcome
    }

    async fn request_prediction(
        &self,
        form: &PredictionForm,
    ) -> Result<PredictionResponse, SubmitError> {
        let request = PredictionRequest::try_from(form).map_err(SubmitError::Form)?;
        self.api
            .predict(&request)
            .await
            .map(|reply| reply.body)
            .map_err(SubmitError::Predictor)
    }

    /// Query `/health` once and reflect the result on the indicator.
    pub async fn check_health(&self, indicator: &mut StatusIndicator) -> HealthState {
        let state = HealthState::classify(&self.api.health().await);
        state.apply(indicator);

        tracing::debug!(state = state.as_str(), "API health checked");
        services::record_health_check(state.as_str());
        state
    }

    /// Page-load flow: the health check, plus a submission when one was posted.
    pub async fn load(&self, page: &mut PredictionPage, submitted: bool) {
        let PredictionPage { submission, status } = page;

        if submitted {
            tokio::join!(self.check_health(status), self.submit(submission));
        } else {
            self.check_health(status).await;
        }
    }
}
