//! Client for the external prediction API (`/predict`, `/health`, `/model_info`).

use crate::config::PredictorApiSettings;
use crate::models::{
    ApiErrorBody, HealthResponse, ModelInfo, PredictionRequest, PredictionResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use service_core::observability::TracedClientExt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictorError {
    /// The request never completed.
    #[error("Failed to reach prediction API: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status and a JSON body.
    #[error("Prediction API returned {status}: {}", message.as_deref().unwrap_or("Unknown error"))]
    Api { status: u16, message: Option<String> },

    /// The body could not be decoded into the expected shape.
    #[error("Failed to decode prediction API response: {0}")]
    Decode(String),
}

/// A decoded upstream answer together with the status it came with.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply<T> {
    pub status_code: u16,
    pub body: T,
}

impl<T> ApiReply<T> {
    pub fn http_ok(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Outcome of a `/health` call that produced a decodable body.
pub type HealthReport = ApiReply<HealthResponse>;

/// A model file served by `/download_model`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDownload {
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait PredictorApi: Send + Sync {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<ApiReply<PredictionResponse>, PredictorError>;

    /// A non-2xx status is still `Ok` as long as the body decodes.
    async fn health(&self) -> Result<HealthReport, PredictorError>;

    async fn model_info(&self) -> Result<ApiReply<ModelInfo>, PredictorError>;

    /// `model_type` is forwarded as `?type=`; the API picks its default when unset.
    async fn download_model(
        &self,
        model_type: Option<&str>,
    ) -> Result<ApiReply<ModelDownload>, PredictorError>;
}

pub struct PredictorClient {
    client: Client,
    settings: PredictorApiSettings,
}

impl PredictorClient {
    pub fn new(settings: PredictorApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.url
    }

    async fn read_body(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<(u16, Vec<u8>), PredictorError> {
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            PredictorError::Transport(e.to_string())
        })?;
        Ok((status, body.to_vec()))
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, PredictorError> {
    serde_json::from_slice(body).map_err(|e| PredictorError::Decode(e.to_string()))
}

/// Decode a 2xx body as `T`, anything else as an [`ApiErrorBody`].
fn decode_success<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
) -> Result<ApiReply<T>, PredictorError> {
    check_status(status, body)?;
    Ok(ApiReply {
        status_code: status,
        body: decode(body)?,
    })
}

fn check_status(status: u16, body: &[u8]) -> Result<(), PredictorError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let err: ApiErrorBody = decode(body)?;
    Err(PredictorError::Api {
        status,
        message: err.error,
    })
}

fn header_string(response: &reqwest::Response, name: reqwest::header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[async_trait]
impl PredictorApi for PredictorClient {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<ApiReply<PredictionResponse>, PredictorError> {
        let url = self.settings.endpoint("/predict");

        let response = self
            .client
            .traced_post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                PredictorError::Transport(e.to_string())
            })?;

        let (status, body) = self.read_body(&url, response).await?;
        decode_success(status, &body)
    }

    async fn health(&self) -> Result<HealthReport, PredictorError> {
        let url = self.settings.endpoint("/health");

        let response = self.client.traced_get(&url).send().await.map_err(|e| {
            tracing::warn!("Health check request to {} failed: {}", url, e);
            PredictorError::Transport(e.to_string())
        })?;

        let (status_code, body) = self.read_body(&url, response).await?;
        Ok(HealthReport {
            status_code,
            body: decode(&body)?,
        })
    }

    async fn model_info(&self) -> Result<ApiReply<ModelInfo>, PredictorError> {
        let url = self.settings.endpoint("/model_info");

        let response = self.client.traced_get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to send GET request to {}: {}", url, e);
            PredictorError::Transport(e.to_string())
        })?;

        let (status, body) = self.read_body(&url, response).await?;
        decode_success(status, &body)
    }

    async fn download_model(
        &self,
        model_type: Option<&str>,
    ) -> Result<ApiReply<ModelDownload>, PredictorError> {
        let url = self.settings.endpoint("/download_model");

        let mut request = self.client.traced_get(&url);
        if let Some(model_type) = model_type {
            request = request.query(&[("type", model_type)]);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to send GET request to {}: {}", url, e);
            PredictorError::Transport(e.to_string())
        })?;

        let content_type = header_string(&response, reqwest::header::CONTENT_TYPE);
        let content_disposition = header_string(&response, reqwest::header::CONTENT_DISPOSITION);
        let (status, bytes) = self.read_body(&url, response).await?;
        check_status(status, &bytes)?;

        tracing::info!(size = bytes.len(), "Downloaded model file");
        Ok(ApiReply {
            status_code: status,
            body: ModelDownload {
                content_type,
                content_disposition,
                bytes,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PredictorClient {
        PredictorClient::new(PredictorApiSettings { url: server.uri() })
    }

    fn request() -> PredictionRequest {
        PredictionRequest {
            day_of_week: 2,
            hour_of_day: 14,
            minute_of_hour: 30,
            device_activity: 0.7,
            device_battery_level: 0.8,
        }
    }

    #[tokio::test]
    async fn test_predict_posts_json_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "dayOfWeek": 2,
                "hourOfDay": 14,
                "minuteOfHour": 30,
                "device_activity": 0.7,
                "device_batteryLevel": 0.8
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prediction": 3.14159,
                "model_type": "sklearn",
                "status": "success"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).predict(&request()).await.unwrap();
        assert_eq!(reply.status_code, 200);
        assert_eq!(reply.body.prediction, 3.14159);
    }

    #[tokio::test]
    async fn test_predict_api_error_carries_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad input"})))
            .mount(&server)
            .await;

        let err = client_for(&server).predict(&request()).await.unwrap_err();
        match err {
            PredictorError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("bad input"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_predict_api_error_without_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = client_for(&server).predict(&request()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Prediction API returned 500: Unknown error"
        );
    }

    #[tokio::test]
    async fn test_predict_non_json_error_is_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).predict(&request()).await.unwrap_err();
        assert!(matches!(err, PredictorError::Decode(_)));
    }

    #[tokio::test]
    async fn test_predict_success_without_prediction_is_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .mount(&server)
            .await;

        let err = client_for(&server).predict(&request()).await.unwrap_err();
        assert!(matches!(err, PredictorError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_transport_failure() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        drop(server);

        let err = client.health().await.unwrap_err();
        assert!(matches!(err, PredictorError::Transport(_)));
    }

    #[tokio::test]
    async fn test_health_non_2xx_is_still_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({"status": "degraded"})),
            )
            .mount(&server)
            .await;

        let report = client_for(&server).health().await.unwrap();
        assert!(!report.http_ok());
        assert_eq!(report.body.status.as_deref(), Some("degraded"));
    }

    #[tokio::test]
    async fn test_model_info_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/model_info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "available_models": [],
                "latest_update": null
            })))
            .mount(&server)
            .await;

        let info = client_for(&server).model_info().await.unwrap().body;
        assert!(info.available_models.is_empty());
        assert!(info.latest_update.is_none());
    }

    #[tokio::test]
    async fn test_download_model_forwards_type_and_keeps_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download_model"))
            .and(query_param("type", "coreml"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-disposition", "attachment; filename=model.mlmodel")
                    .set_body_raw(vec![1u8, 2, 3], "application/octet-stream"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .download_model(Some("coreml"))
            .await
            .unwrap();

        assert_eq!(reply.body.bytes, vec![1u8, 2, 3]);
        assert_eq!(
            reply.body.content_type.as_deref(),
            Some("application/octet-stream")
        );
        assert_eq!(
            reply.body.content_disposition.as_deref(),
            Some("attachment; filename=model.mlmodel")
        );
    }

    #[tokio::test]
    async fn test_download_model_missing_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download_model"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"error": "Requested model not available"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).download_model(None).await.unwrap_err();
        match err {
            PredictorError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message.as_deref(), Some("Requested model not available"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
