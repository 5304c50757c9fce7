use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    #[serde(skip)]
    pub status: StatusCode,
    pub code: String,
    pub message: String,
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ApiErrorDetail {
    pub fn invalid_input(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "INVALID_INPUT".to_string(),
            message: message.into(),
            retryable: true,
            suggestion: Some(suggestion.into()),
        }
    }

    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            code: "RATE_LIMITED".to_string(),
            message: "Too many requests".to_string(),
            retryable: true,
            suggestion: Some(format!("Retry after {retry_after_secs} seconds")),
        }
    }

    pub fn unknown_platform(name: &str) -> Self {
        Self::invalid_input(
            format!("Unknown platform '{name}'"),
            "Valid platforms: twitter, facebook, whatsapp, telegram",
        )
    }
}

impl IntoResponse for ApiErrorDetail {
    fn into_response(self) -> Response {
        warn!(code = %self.code, message = %self.message, "Request rejected");
        (self.status, Json(self)).into_response()
    }
}
