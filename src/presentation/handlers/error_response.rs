use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::SpeechError;
use crate::domain::SynthesisRequestError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Handler failure rendered as `{error, message}` with a matching status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "VALIDATION_ERROR",
            message: message.into(),
        }
    }

    pub fn unsupported_language(code: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "UNSUPPORTED_LANGUAGE",
            message: format!("Unsupported language: {}", code),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_ERROR",
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<SpeechError> for ApiError {
    fn from(e: SpeechError) -> Self {
        let status = match e {
            SpeechError::Decode(_) | SpeechError::UnintelligibleAudio => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            SpeechError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SpeechError::Synthesis(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            code: e.code(),
            message: e.to_string(),
        }
    }
}

impl From<SynthesisRequestError> for ApiError {
    fn from(e: SynthesisRequestError) -> Self {
        Self::bad_request(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, code = self.code, message = %self.message, "Request failed");
        } else {
            tracing::warn!(status = %self.status, code = self.code, message = %self.message, "Request rejected");
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.code.to_string(),
                message: self.message,
            }),
        )
            .into_response()
    }
}
