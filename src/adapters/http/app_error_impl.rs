use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Database not configured - please try again later";

impl AppError {
    /// Renders the error, using `failure_message` as the body for
    /// unexpected failures so each route can name what went wrong.
    pub fn into_response_with(self, failure_message: &'static str) -> Response {
        // Log the error before it gets converted into a status response.
        if self.is_client_error() {
            tracing::info!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = ?self, "Request failed");
        }

        let code = self.code();
        match self {
            AppError::MissingFields(fields) => {
                let body = serde_json::json!({
                    "error": MISSING_FIELDS_MESSAGE,
                    "code": code.as_str(),
                    "missing": fields,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::StoreUnavailable(_) => {
                error_resp(StatusCode::SERVICE_UNAVAILABLE, code, STORE_UNAVAILABLE_MESSAGE)
            }
            // Only missing fields are reported as 400.
            AppError::InvalidBody(_) | AppError::Database(_) | AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, code, failure_message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_with("Internal error")
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = serde_json::json!({ "error": message, "code": code.as_str() });
    (status, Json(body)).into_response()
}
