use serde::Deserialize;
use service_core::config::Config as ServerSettings;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub predictor_api: PredictorApiSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PredictorApiSettings {
    /// Base URL of the external prediction API (e.g. http://localhost:5001).
    pub url: String,
}

impl PredictorApiSettings {
    /// Absolute URL for an API path such as `/predict`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint. Span export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("No working directory: {}", e)))?;

    // Works both from the workspace root and from inside predictor-frontend
    let configuration_directory = if base_path.ends_with("predictor-frontend") {
        base_path.join("config")
    } else {
        base_path.join("predictor-frontend").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
