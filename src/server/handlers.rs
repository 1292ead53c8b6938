// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::FactCheckError;
use crate::factcheck::{format_error, validate_input, Verdict};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct FactCheckRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct FactCheckResponse {
    /// `false` when `result` is an error message.
    pub ok: bool,
    /// Text to display: the model reply or the error message.
    pub result: String,
    #[serde(flatten)]
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
    pub endpoint: String,
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let client = state.checker.client();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model: client.model().to_string(),
        endpoint: client.endpoint().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn metrics_handler() -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
        .into_response()
}

/// Handler for /v1/fact-check
pub async fn fact_check_handler(
    State(state): State<AppState>,
    body: String, // Get raw JSON as string first
) -> Result<Json<FactCheckResponse>, FactCheckError> {
    // Manually deserialize to keep the error envelope consistent
    let req: FactCheckRequest = serde_json::from_str(&body)
        .map_err(|e| FactCheckError::InvalidRequest(format!("JSON deserialization error: {}", e)))?;

    let text = validate_input(&req.text)?;
    info!("Received fact-check request: {} chars", text.len());

    let response = match state.checker.check(text).await {
        Ok(verdict) => FactCheckResponse {
            ok: true,
            result: verdict.text.clone(),
            verdict: Some(verdict),
        },
        Err(e) => {
            debug!("Returning error result to caller: {}", e.kind());
            FactCheckResponse {
                ok: false,
                result: format_error(&e),
                verdict: None,
            }
        }
    };

    Ok(Json(response))
}
