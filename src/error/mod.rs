// Error types for newscheck
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Warning shown when the caller submits blank text.
pub const EMPTY_INPUT_WARNING: &str = "Please enter text to fact-check.";

#[derive(Error, Debug)]
pub enum FactCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("{}", EMPTY_INPUT_WARNING)]
    EmptyInput,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Response parsing error: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FactCheckError {
    /// Whether the failure came from talking to the Gemini API
    /// (transport, status or body decoding).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            FactCheckError::Http(_) | FactCheckError::Upstream { .. } | FactCheckError::Decode(_)
        )
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FactCheckError::Config(_) | FactCheckError::ConfigParsing(_) => "config",
            FactCheckError::EmptyInput | FactCheckError::InvalidRequest(_) => "invalid_input",
            FactCheckError::Http(e) if e.is_timeout() => "timeout",
            FactCheckError::Http(_) => "network",
            FactCheckError::Upstream { .. } => "http_status",
            FactCheckError::Decode(_) => "decode",
            FactCheckError::Internal(_) => "internal",
        }
    }
}

// Convert FactCheckError to HTTP responses for Axum
impl IntoResponse for FactCheckError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            FactCheckError::EmptyInput | FactCheckError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, "invalid_request_error")
            }
            FactCheckError::Config(_) | FactCheckError::ConfigParsing(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
            e if e.is_upstream() => (StatusCode::BAD_GATEWAY, "api_error"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "api_error"),
        };

        let body = json!({
            "type": "error",
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, FactCheckError>;
