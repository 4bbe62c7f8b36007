pub mod metrics;
pub mod predictor_client;

pub use metrics::{get_metrics, init_metrics, record_health_check, record_prediction};
pub use predictor_client::{
    ApiReply, HealthReport, ModelDownload, PredictorApi, PredictorClient, PredictorError,
};
