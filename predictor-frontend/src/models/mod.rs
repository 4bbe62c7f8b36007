pub mod form;
pub mod prediction;

pub use form::{FormError, PredictionForm};
pub use prediction::{
    ApiErrorBody, HealthResponse, ModelArtifact, ModelInfo, PredictionRequest, PredictionResponse,
};
