//! Structured logging and credential redaction.
//!
//! This module configures the `tracing` ecosystem for the application and
//! provides utilities to prevent the Gemini API key from leaking into logs or
//! user-facing error messages.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{FactCheckError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// Logs go to stderr so `check` output on stdout stays clean. Log levels are
/// controlled via the `RUST_LOG` environment variable or the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let result = match config.format.as_str() {
        "json" => registry.with(fmt.json()).try_init(),
        "compact" => registry.with(fmt.compact()).try_init(),
        _ => registry.with(fmt.pretty()).try_init(),
    };

    result.map_err(|e| FactCheckError::Internal(format!("Failed to initialize logging: {}", e)))
}

const API_KEY_PREFIX: &str = "AIza";
const KEY_PARAM: &str = "key=";

/// Sanitizes sensitive information from log messages.
///
/// Replaces every Google API key (`AIza...`) and the value of every `key=`
/// query parameter with a `\[REDACTED\]` placeholder.
pub fn sanitize(input: &str) -> String {
    let result = redact_after(input, API_KEY_PREFIX, "[REDACTED_API_KEY]", true);
    redact_after(&result, KEY_PARAM, "[REDACTED]", false)
}

/// Replace each token starting at `marker` (or just after it, when
/// `include_marker` is false) up to the next delimiter.
fn redact_after(input: &str, marker: &str, placeholder: &str, include_marker: bool) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(marker) {
        let value_start = pos + marker.len();
        let value_len = rest[value_start..]
            .find(is_delimiter)
            .unwrap_or(rest.len() - value_start);

        if value_len == 0 || rest[value_start..].starts_with(placeholder) {
            output.push_str(&rest[..value_start + value_len]);
        } else {
            let keep = if include_marker { pos } else { value_start };
            output.push_str(&rest[..keep]);
            output.push_str(placeholder);
        }
        rest = &rest[value_start + value_len..];
    }

    output.push_str(rest);
    output
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '&' | ',' | ')' | ';')
}
