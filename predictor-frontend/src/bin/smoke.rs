//! Smoke test for a running prediction API.
//!
//! Checks `/health`, then posts a handful of random feature samples to
//! `/predict` and reports each outcome.

use clap::Parser;
use predictor_frontend::config::PredictorApiSettings;
use predictor_frontend::controller::HealthState;
use predictor_frontend::models::PredictionRequest;
use predictor_frontend::services::{PredictorApi, PredictorClient};
use rand::Rng;
use service_core::observability::init_tracing;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "predictor-smoke", about = "Smoke-test a notification time prediction API")]
struct Cli {
    /// Base URL of the prediction API
    #[arg(long, default_value = "http://localhost:5001")]
    api_url: String,

    /// Number of random samples to predict
    #[arg(long, default_value_t = 5)]
    samples: usize,

    /// Pause between prediction requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn random_sample(rng: &mut impl Rng) -> PredictionRequest {
    PredictionRequest {
        day_of_week: rng.gen_range(0..=6),
        hour_of_day: rng.gen_range(0..=23),
        minute_of_hour: rng.gen_range(0..=59),
        device_activity: round2(rng.gen::<f64>()),
        device_battery_level: round2(rng.gen_range(0.1..=1.0)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing("predictor-smoke", "warn", None);

    let client = PredictorClient::new(PredictorApiSettings {
        url: cli.api_url.clone(),
    });

    println!("=== Prediction API smoke test ===");
    println!("API: {}\n", client.base_url());

    let health = client.health().await;
    if let Ok(report) = &health {
        println!(
            "Health check: HTTP {} {}",
            report.status_code,
            serde_json::to_string(&report.body)?
        );
    }
    let state = HealthState::classify(&health);
    println!("Status: {}", state.text());

    if state != HealthState::Ready {
        println!("\nHealth check failed. Is the server running with a model loaded?");
        return Ok(ExitCode::FAILURE);
    }

    let mut rng = rand::thread_rng();
    let mut failures = 0;

    for i in 0..cli.samples {
        let sample = random_sample(&mut rng);
        println!("\nSample {}:", i + 1);
        println!("  Input: {}", serde_json::to_string(&sample)?);

        match client.predict(&sample).await {
            Ok(reply) => println!("  Prediction: {}", reply.body.display_value()),
            Err(e) => {
                failures += 1;
                println!("  Failed: {}", e);
            }
        }

        if i + 1 < cli.samples {
            tokio::time::sleep(Duration::from_millis(cli.delay_ms)).await;
        }
    }

    println!(
        "\n{} of {} predictions succeeded",
        cli.samples - failures,
        cli.samples
    );

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
