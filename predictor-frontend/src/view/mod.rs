//! View-models for each region of the prediction page.
//!
//! Every region owns its state and exposes explicit update methods; handlers
//! and the controller never poke at rendered markup directly.

pub mod form;
pub mod page;
pub mod result;
pub mod status;

pub use form::{DayOption, FormView, SliderBinding, SubmitButton, SubmitGuard, PREDICTING_LABEL, SUBMIT_LABEL};
pub use page::{PredictionPage, SubmissionView};
pub use result::{AlertLog, ResultPanel};
pub use status::{IndicatorClass, StatusIndicator};
