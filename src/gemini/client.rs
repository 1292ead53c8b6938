// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use crate::config::{ApiKey, GeminiConfig};
use crate::error::{FactCheckError, Result};
use crate::metrics;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::utils::logging::sanitize;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Client for the Google Gemini Generative Language API.
///
/// Sends one `generateContent` request per call, authenticated with an API key.
/// There is no retry: a failed call is reported to the caller as-is.
pub struct GeminiClient {
    http_client: Client,
    endpoint: String,
    model: String,
    api_key: ApiKey,
}

impl GeminiClient {
    /// Create a new Gemini client from configuration.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .use_rustls_tls()
            .build()
            .map_err(|e| FactCheckError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.api_base_url.trim_end_matches('/'),
            config.model
        );

        debug!(
            "Created Gemini client for {} (timeout {}s)",
            endpoint, config.timeout_seconds
        );

        Ok(Self {
            http_client,
            endpoint,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full `generateContent` URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Call Gemini `generateContent` API (blocking, single attempt).
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        debug!("Calling generateContent API for model: {}", self.model);
        let start = Instant::now();

        let response = match self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", self.api_key.expose())
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                metrics::record_gemini_call(&self.model, 0, start.elapsed().as_secs_f64());
                error!("Gemini API request failed: {}", sanitize(&e.to_string()));
                return Err(FactCheckError::Http(e.without_url()));
            }
        };

        let status = response.status();
        let body = response.text().await;
        metrics::record_gemini_call(&self.model, status.as_u16(), start.elapsed().as_secs_f64());

        let body = body.map_err(|e| {
            error!("Failed to read Gemini response body: {}", sanitize(&e.to_string()));
            FactCheckError::Http(e.without_url())
        })?;

        if !status.is_success() {
            error!(
                "Gemini API error: HTTP {} - Response body: {}",
                status,
                sanitize(&body)
            );
            // Google error object, else the raw body, else the reason phrase
            let message = Self::extract_error_message(&body)
                .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            return Err(FactCheckError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            body.chars().take(500).collect::<String>()
        );

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            FactCheckError::Decode(e.to_string())
        })
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        let error = serde_json::from_str::<ErrorResponse>(response_text)
            .ok()?
            .error?;
        error.message.or(error.status)
    }
}
