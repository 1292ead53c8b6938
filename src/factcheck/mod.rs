//! The fact-check request handler.
//!
//! Builds the grounded prompt, makes a single `generateContent` call and reads
//! the first candidate's first text part. [`FactChecker::fact_check`] is the
//! display-oriented entry point: it always returns a string, turning every
//! failure into an error message instead of propagating it.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod prompt;
mod reply;

pub use prompt::{build_prompt, validate_input};
pub use reply::{extract_reply, grounding_sources, MissingField, ReplyExtraction, Source};

use crate::error::{FactCheckError, Result};
use crate::gemini::GeminiClient;
use crate::metrics;
use crate::models::gemini::GenerateContentRequest;
use crate::utils::logging::sanitize;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error as _;
use std::time::Instant;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Prefix of every error string returned by [`FactChecker::fact_check`].
pub const ERROR_PREFIX: &str = "❌ Error: Unable to contact Gemini API.";

/// Successful fact check.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub id: Uuid,
    /// Model reply, verbatim markdown. Empty when `missing` is set.
    pub text: String,
    /// Response level that was absent, if the reply could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<MissingField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    /// Model version reported by the API, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    pub checked_at: DateTime<Utc>,
}

/// Turn a failure into the user-facing error string.
///
/// Includes the error's source chain so transport failures keep their cause
/// (e.g. "operation timed out").
pub fn format_error(error: &FactCheckError) -> String {
    let mut details = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !details.contains(&text) {
            details.push_str(": ");
            details.push_str(&text);
        }
        source = cause.source();
    }
    format!("{} Details: {}", ERROR_PREFIX, sanitize(&details))
}

/// Fact-check handler: one prompt, one API call, one reply.
pub struct FactChecker {
    client: GeminiClient,
}

impl FactChecker {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GeminiClient {
        &self.client
    }

    /// Run a fact check and return the typed result.
    ///
    /// Callers are expected to have run [`validate_input`] first.
    #[instrument(skip_all, fields(input_len = text.len(), model = %self.client.model()))]
    pub async fn check(&self, text: &str) -> Result<Verdict> {
        let start = Instant::now();
        let request = GenerateContentRequest::grounded_text(build_prompt(text));

        let response = match self.client.generate_content(&request).await {
            Ok(response) => response,
            Err(e) => {
                metrics::record_fact_check(e.kind());
                warn!(kind = e.kind(), "Fact check failed: {}", sanitize(&e.to_string()));
                return Err(e);
            }
        };

        if let Some(usage) = &response.usage_metadata {
            metrics::record_tokens(
                self.client.model(),
                usage.prompt_token_count.unwrap_or(0),
                usage.candidates_token_count.unwrap_or(0),
            );
        }

        let sources = grounding_sources(&response);
        let extraction = extract_reply(&response);
        let missing = match &extraction {
            ReplyExtraction::Text(_) => {
                metrics::record_fact_check("reply");
                None
            }
            ReplyExtraction::Missing(field) => {
                metrics::record_fact_check("empty_reply");
                warn!(missing = %field, "Gemini response had no reply text");
                Some(*field)
            }
        };
        let text = extraction.into_text();

        info!(
            reply_len = text.len(),
            sources = sources.len(),
            model_version = response.model_version.as_deref().unwrap_or("unknown"),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fact check complete"
        );

        Ok(Verdict {
            id: Uuid::new_v4(),
            text,
            missing,
            sources,
            model_version: response.model_version,
            checked_at: Utc::now(),
        })
    }

    /// Run a fact check and return a displayable string.
    ///
    /// The reply text on success (empty if the response carried none), or an
    /// error string starting with [`ERROR_PREFIX`] on any failure.
    pub async fn fact_check(&self, text: &str) -> String {
        match self.check(text).await {
            Ok(verdict) => verdict.text,
            Err(e) => format_error(&e),
        }
    }
}
