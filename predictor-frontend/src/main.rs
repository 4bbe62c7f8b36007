use dotenvy::dotenv;
use predictor_frontend::config::get_configuration;
use predictor_frontend::services::{init_metrics, PredictorClient};
use predictor_frontend::startup::build_router;
use predictor_frontend::AppState;
use service_core::observability::init_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "predictor-frontend",
        &configuration.telemetry.log_level,
        configuration.telemetry.otlp_endpoint.as_deref(),
    );

    init_metrics().map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))?;

    let predictor = PredictorClient::new(configuration.predictor_api.clone());
    info!(predictor_api = %predictor.base_url(), "Using prediction API");

    let app = build_router(AppState::new(Arc::new(predictor)));

    let address = configuration.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting predictor-frontend on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
