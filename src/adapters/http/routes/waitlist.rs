//! Waitlist signup and counter routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::{
    adapters::http::app_state::AppState, app_error::AppError,
    entities::waitlist_entry::WaitlistSubmission,
};

const JOIN_FAILED: &str = "Failed to join waitlist";
const COUNT_FAILED: &str = "Failed to get waitlist count";
pub const JOIN_SUCCESS_MESSAGE: &str = "Successfully joined waitlist!";

#[derive(Serialize)]
struct JoinResponse {
    success: bool,
    message: &'static str,
    count: i64,
}

#[derive(Serialize)]
struct CountResponse {
    count: i64,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(count).post(join))
}

/// POST /api/waitlist
/// Adds one entry and returns the updated total.
async fn join(
    State(app_state): State<AppState>,
    payload: Result<Json<WaitlistSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(submission) = payload.map_err(|rejection| {
        AppError::InvalidBody(rejection.body_text()).into_response_with(JOIN_FAILED)
    })?;

    let outcome = app_state
        .waitlist_use_cases
        .join(submission)
        .await
        .map_err(|e| e.into_response_with(JOIN_FAILED))?;

    Ok(Json(JoinResponse {
        success: true,
        message: JOIN_SUCCESS_MESSAGE,
        count: outcome.count,
    }))
}

/// GET /api/waitlist
/// Current total. An unavailable store reads as zero so pages still render.
async fn count(State(app_state): State<AppState>) -> Result<impl IntoResponse, Response> {
    let count = app_state
        .waitlist_use_cases
        .display_count()
        .await
        .map_err(|e| e.into_response_with(COUNT_FAILED))?;

    Ok(Json(CountResponse { count }))
}
