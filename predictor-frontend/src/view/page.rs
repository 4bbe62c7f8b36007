use super::{AlertLog, FormView, ResultPanel, StatusIndicator};
use crate::models::PredictionForm;

/// Everything a form submission may touch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionView {
    pub form: FormView,
    pub result: ResultPanel,
    pub alerts: AlertLog,
}

/// Whole-page view-model. The submission and the status indicator are
/// disjoint so both flows can run at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionPage {
    pub submission: SubmissionView,
    pub status: StatusIndicator,
}

impl PredictionPage {
    /// Page for a posted form. A prediction that was on screen when the
    /// form was posted is shown again until a new one replaces it.
    pub fn with_form(form: &PredictionForm) -> Self {
        let mut result = ResultPanel::new();
        if let Some(previous) = form.previous_result() {
            result.show(previous);
        }

        Self {
            submission: SubmissionView {
                form: FormView::from_form(form),
                result,
                alerts: AlertLog::default(),
            },
            status: StatusIndicator::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_form_restores_previous_result() {
        let form = PredictionForm {
            last_prediction: Some("7.5".to_string()),
            ..PredictionForm::default()
        };

        let page = PredictionPage::with_form(&form);

        assert!(!page.submission.result.is_hidden());
        assert_eq!(page.submission.result.value(), Some("7.50"));
    }

    #[test]
    fn test_with_form_without_previous_result_is_hidden() {
        let page = PredictionPage::with_form(&PredictionForm::default());
        assert!(page.submission.result.is_hidden());
    }
}
