use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{adapters::http::app_state::AppState, app_error::AppError};

const JOIN_FAILED: &str = "Failed to join waitlist. Please try again.";
const COUNT_FAILED: &str = "Failed to get waitlist count";

#[derive(Deserialize)]
struct JoinPayload {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Serialize)]
struct JoinResponse {
    success: bool,
    position: u64,
}

#[derive(Serialize)]
struct CountResponse {
    count: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(join))
        .route("/count", get(count))
}

async fn join(
    State(app_state): State<AppState>,
    payload: Result<Json<JoinPayload>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::InvalidInput(rejection.body_text()).into_response_with(JOIN_FAILED)
    })?;
    let email = payload.email.unwrap_or_default();

    let outcome = app_state
        .waitlist_use_cases
        .join(&email)
        .await
        .map_err(|err| err.into_response_with(JOIN_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(JoinResponse {
            success: true,
            position: outcome.position,
        }),
    ))
}

async fn count(State(app_state): State<AppState>) -> Result<impl IntoResponse, Response> {
    let count = app_state
        .waitlist_use_cases
        .count()
        .await
        .map_err(|err| err.into_response_with(COUNT_FAILED))?;
    Ok(Json(CountResponse { count }))
}
