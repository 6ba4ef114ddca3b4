use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const DEFAULT_INTERNAL_MESSAGE: &str = "Internal error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_with(DEFAULT_INTERNAL_MESSAGE)
    }
}

impl AppError {
    /// Converts into a response, replacing the detail of an internal error
    /// with `internal_message` so nothing unexpected leaks to the client.
    pub fn into_response_with(self, internal_message: &str) -> Response {
        let code = self.code();
        match self {
            AppError::InvalidInput(msg) => {
                tracing::debug!(error = %msg, "Rejected invalid input");
                error_resp(StatusCode::BAD_REQUEST, code, &msg)
            }
            AppError::DuplicateEmail => {
                tracing::debug!("Rejected duplicate waitlist email");
                error_resp(
                    StatusCode::CONFLICT,
                    code,
                    "This email is already on the waitlist",
                )
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, code, internal_message)
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = serde_json::json!({ "error": message, "code": code.as_str() });
    (status, Json(body)).into_response()
}
