use predictor_frontend::config::PredictorApiSettings;
use predictor_frontend::services::PredictorClient;
use predictor_frontend::startup::build_router;
use predictor_frontend::AppState;
use serde_json::Value;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A frontend on a random port in front of a fake prediction API.
pub struct TestApp {
    pub address: String,
    pub upstream: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let upstream = MockServer::start().await;

        let predictor = PredictorClient::new(PredictorApiSettings {
            url: upstream.uri(),
        });
        let app = build_router(AppState::new(Arc::new(predictor)));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            upstream,
            client: reqwest::Client::new(),
        }
    }

    pub async fn mock_health(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.upstream)
            .await;
    }

    pub async fn mock_predict(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.upstream)
            .await;
    }

    pub async fn get_page(&self) -> String {
        self.client
            .get(&self.address)
            .send()
            .await
            .expect("Failed to execute request")
            .text()
            .await
            .expect("Failed to read page")
    }

    pub async fn post_form(&self, fields: &[(&str, &str)]) -> String {
        self.client
            .post(&self.address)
            .form(fields)
            .send()
            .await
            .expect("Failed to execute request")
            .text()
            .await
            .expect("Failed to read page")
    }
}

pub const VALID_FORM: [(&str, &str); 5] = [
    ("dayOfWeek", "2"),
    ("hourOfDay", "14"),
    ("minuteOfHour", "30"),
    ("device_activity", "0.7"),
    ("device_batteryLevel", "0.8"),
];
