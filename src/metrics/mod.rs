// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics, FACT_CHECKS, GEMINI_API_CALLS, GEMINI_API_DURATION, REQUESTS_TOTAL,
    TOKENS_TOTAL,
};

/// Helper to record service request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16) {
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status_code.to_string()])
        .inc();
}

/// Helper to record Gemini API call metrics.
///
/// `status_code` is `0` when no HTTP response was received.
pub fn record_gemini_call(model: &str, status_code: u16, duration_secs: f64) {
    GEMINI_API_CALLS
        .with_label_values(&[model, &status_code.to_string()])
        .inc();

    GEMINI_API_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

/// Helper to record the outcome of one fact check
pub fn record_fact_check(outcome: &str) {
    FACT_CHECKS.with_label_values(&[outcome]).inc();
}

/// Helper to record token usage
pub fn record_tokens(model: &str, prompt: u32, candidates: u32) {
    if prompt > 0 {
        TOKENS_TOTAL
            .with_label_values(&[model, "prompt"])
            .inc_by(prompt as f64);
    }
    if candidates > 0 {
        TOKENS_TOTAL
            .with_label_values(&[model, "candidates"])
            .inc_by(candidates as f64);
    }
}
