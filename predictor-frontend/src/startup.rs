use axum::{middleware::from_fn, routing::get, Router};
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use service_core::observability::extract_request_id;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    api,
    app::{index, ready, submit_form},
    metrics::metrics,
};
use crate::AppState;

/// Stylesheet directory, from the workspace root or the crate directory.
fn static_dir() -> PathBuf {
    let base = std::env::current_dir().unwrap_or_default();
    if base.ends_with("predictor-frontend") {
        base.join("static")
    } else {
        base.join("predictor-frontend").join("static")
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/predict", axum::routing::post(api::predict))
        .route("/health", get(api::health))
        .route("/model_info", get(api::model_info))
        .route("/download_model", get(api::download_model))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
        .route_layer(from_fn(metrics_middleware))
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = extract_request_id(request.headers())
                    .unwrap_or_else(|| "-".to_string());

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost, so the trace span sees the request id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
