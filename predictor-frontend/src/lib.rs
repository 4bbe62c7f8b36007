pub mod config;
pub mod controller;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod view;

use services::PredictorApi;
use std::sync::Arc;

/// Shared application state: the client for the external prediction API.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn PredictorApi>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn PredictorApi>) -> Self {
        Self { predictor }
    }
}
