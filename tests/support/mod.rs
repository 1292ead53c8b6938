// Shared helpers for integration tests
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use mockito::ServerGuard;
use newscheck::config::{ApiKey, GeminiConfig};
use newscheck::factcheck::FactChecker;
use newscheck::gemini::GeminiClient;

pub const API_KEY: &str = "test-key";
pub const MODEL: &str = "gemini-2.5-flash";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

pub fn gemini_config(base_url: String, timeout_seconds: u64) -> GeminiConfig {
    GeminiConfig {
        api_base_url: base_url,
        model: MODEL.to_string(),
        api_key: ApiKey::new(API_KEY),
        timeout_seconds,
        connect_timeout_seconds: timeout_seconds,
    }
}

/// Fact checker pointed at a mockito server.
pub fn checker_for(server: &ServerGuard) -> FactChecker {
    checker_at(format!("{}/v1beta", server.url()), 5)
}

pub fn checker_at(base_url: String, timeout_seconds: u64) -> FactChecker {
    let client = GeminiClient::new(&gemini_config(base_url, timeout_seconds)).unwrap();
    FactChecker::new(client)
}

/// Mock a JSON reply from the generateContent endpoint.
pub async fn mock_generate(server: &mut ServerGuard, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("POST", GENERATE_PATH)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
