//! Pass-through to the prediction API.
//!
//! The page's own `/predict`, `/health`, `/model_info` and `/download_model`
//! paths answer with the upstream's status and body, so scripts written
//! against the API keep working when pointed at the frontend.

use crate::models::{ApiErrorBody, PredictionRequest};
use crate::services::PredictorError;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use service_core::error::AppError;
use validator::Validate;

fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

fn relay_error(err: PredictorError) -> Result<Response, AppError> {
    match err {
        PredictorError::Api { status, message } => Ok((
            upstream_status(status),
            Json(ApiErrorBody { error: message }),
        )
            .into_response()),
        other => {
            tracing::error!(error = %other, "Prediction API call failed");
            Err(AppError::BadGateway(other.to_string()))
        }
    }
}

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Response, AppError> {
    request.validate()?;

    match state.predictor.predict(&request).await {
        Ok(reply) => Ok((upstream_status(reply.status_code), Json(reply.body)).into_response()),
        Err(e) => relay_error(e),
    }
}

pub async fn health(State(state): State<AppState>) -> Response {
    match state.predictor.health().await {
        Ok(report) => (upstream_status(report.status_code), Json(report.body)).into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "offline",
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}

pub async fn model_info(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.predictor.model_info().await {
        Ok(reply) => Ok((upstream_status(reply.status_code), Json(reply.body)).into_response()),
        Err(e) => relay_error(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    #[serde(rename = "type")]
    pub model_type: Option<String>,
}

pub async fn download_model(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    let reply = match state
        .predictor
        .download_model(query.model_type.as_deref())
        .await
    {
        Ok(reply) => reply,
        Err(e) => return relay_error(e),
    };

    let mut headers = HeaderMap::new();
    let file = reply.body;
    for (name, value) in [
        (header::CONTENT_TYPE, file.content_type),
        (header::CONTENT_DISPOSITION, file.content_disposition),
    ] {
        if let Some(value) = value.and_then(|v| HeaderValue::from_str(&v).ok()) {
            headers.insert(name, value);
        }
    }

    Ok((upstream_status(reply.status_code), headers, file.bytes).into_response())
}
