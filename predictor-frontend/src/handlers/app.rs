use crate::controller::PredictionFormController;
use crate::models::PredictionForm;
use crate::view::PredictionPage;
use crate::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse, Form, Json};
use serde_json::json;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PredictionPage,
}

/// Initial page load: default form values and a fresh health check.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut page = PredictionPage::default();

    PredictionFormController::new(state.predictor.as_ref())
        .load(&mut page, false)
        .await;

    IndexTemplate { page }
}

/// Form post: run the submission and the health check, then re-render.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<PredictionForm>,
) -> impl IntoResponse {
    let mut page = PredictionPage::with_form(&form);

    PredictionFormController::new(state.predictor.as_ref())
        .load(&mut page, true)
        .await;

    IndexTemplate { page }
}

/// Liveness of this frontend, independent of the prediction API.
pub async fn ready() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "predictor-frontend",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
