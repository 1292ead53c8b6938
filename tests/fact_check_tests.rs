// Fact-check handler tests against a mocked Gemini API
// Author: kelexine (https://github.com/kelexine)

mod support;

use mockito::Matcher;
use newscheck::error::FactCheckError;
use newscheck::factcheck::{build_prompt, MissingField, ERROR_PREFIX};
use newscheck::metrics::gather_metrics;
use serde_json::json;
use std::time::Duration;
use support::{checker_at, checker_for, mock_generate, API_KEY, GENERATE_PATH};

#[tokio::test]
async fn test_returns_first_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_generate(
        &mut server,
        200,
        r#"{"candidates":[{"content":{"parts":[{"text":"Claim verified."}]}}]}"#,
    )
    .await;

    let checker = checker_for(&server);
    let result = checker.fact_check("The Eiffel Tower is in Paris.").await;

    assert_eq!(result, "Claim verified.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_wire_contract() {
    let mut server = mockito::Server::new_async().await;
    let snippet = "Scientists confirm the moon is made of cheese.";
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", API_KEY)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "contents": [{"parts": [{"text": build_prompt(snippet)}]}],
            "tools": [{"google_search": {}}]
        })))
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"**Key Claim:** ..."}]}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let checker = checker_for(&server);
    assert_eq!(checker.fact_check(snippet).await, "**Key Claim:** ...");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_candidates_returns_empty_string() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_generate(&mut server, 200, r#"{"promptFeedback":{"blockReason":"OTHER"}}"#).await;

    let checker = checker_for(&server);
    assert_eq!(checker.fact_check("Some headline").await, "");

    let verdict = checker.check("Some headline").await.unwrap();
    assert_eq!(verdict.text, "");
    assert_eq!(verdict.missing, Some(MissingField::Candidates));
}

#[tokio::test]
async fn test_verdict_carries_grounding_sources() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_generate(
        &mut server,
        200,
        r#"{"candidates":[{
            "content":{"role":"model","parts":[{"text":"**Conclusion:** False"}]},
            "groundingMetadata":{
                "webSearchQueries":["moon cheese"],
                "groundingChunks":[{"web":{"uri":"https://nasa.example/moon","title":"nasa.example"}}]
            }
        }]}"#,
    )
    .await;

    let verdict = checker_for(&server).check("The moon is cheese").await.unwrap();
    assert_eq!(verdict.text, "**Conclusion:** False");
    assert!(verdict.missing.is_none());
    assert_eq!(verdict.sources.len(), 1);
    assert_eq!(verdict.sources[0].uri, "https://nasa.example/moon");
}

#[tokio::test]
async fn test_usage_metadata_is_recorded() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_generate(
        &mut server,
        200,
        r#"{
            "candidates":[{"content":{"parts":[{"text":"**Key Claim:** ok"}]}}],
            "usageMetadata":{"promptTokenCount":42,"candidatesTokenCount":7,"totalTokenCount":49},
            "modelVersion":"gemini-2.5-flash-001"
        }"#,
    )
    .await;

    let verdict = checker_for(&server).check("Some headline").await.unwrap();
    assert_eq!(verdict.model_version.as_deref(), Some("gemini-2.5-flash-001"));

    let metrics = gather_metrics();
    assert!(metrics.contains("tokens_total{model=\"gemini-2.5-flash\",type=\"prompt\"}"));
    assert!(metrics.contains("tokens_total{model=\"gemini-2.5-flash\",type=\"candidates\"}"));
}

#[tokio::test]
async fn test_http_error_status_returns_error_string() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_generate(
        &mut server,
        503,
        r#"{"error":{"code":503,"message":"The model is overloaded.","status":"UNAVAILABLE"}}"#,
    )
    .await;

    let checker = checker_for(&server);
    let result = checker.fact_check("Some headline").await;

    assert!(result.starts_with(ERROR_PREFIX), "got: {}", result);
    assert!(result.contains("HTTP 503"));
    assert!(result.contains("The model is overloaded."));

    let err = checker.check("Some headline").await.unwrap_err();
    assert!(matches!(err, FactCheckError::Upstream { status: 503, .. }));
}

#[tokio::test]
async fn test_non_json_error_body_is_reported_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(500)
        .with_body("upstream exploded: quota\n")
        .create_async()
        .await;

    let result = checker_for(&server).fact_check("Some headline").await;
    assert_eq!(
        result,
        "❌ Error: Unable to contact Gemini API. Details: HTTP 500: upstream exploded: quota"
    );
}

#[tokio::test]
async fn test_empty_error_body_uses_status_reason() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(502)
        .create_async()
        .await;

    let result = checker_for(&server).fact_check("Some headline").await;
    assert!(result.starts_with(ERROR_PREFIX));
    assert!(result.ends_with("HTTP 502: Bad Gateway"), "got: {}", result);
}

#[tokio::test]
async fn test_malformed_json_returns_error_string() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_generate(&mut server, 200, "{not json").await;

    let checker = checker_for(&server);
    let result = checker.fact_check("Some headline").await;
    assert!(result.starts_with(ERROR_PREFIX));
    assert!(result.contains("Response parsing error"));

    let err = checker.check("Some headline").await.unwrap_err();
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_timeout_returns_error_string() {
    // Accept connections but never answer
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let checker = checker_at(format!("http://{}/v1beta", addr), 1);

    let started = std::time::Instant::now();
    let result = checker.fact_check("Some headline").await;
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(result.starts_with(ERROR_PREFIX), "got: {}", result);
    assert!(result.contains("timed out"), "got: {}", result);

    let err = checker.check("Some headline").await.unwrap_err();
    assert_eq!(err.kind(), "timeout");
}

#[tokio::test]
async fn test_connection_refused_returns_error_string() {
    // Grab a free port and release it so nothing is listening
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let checker = checker_at(format!("http://{}/v1beta", addr), 2);
    let result = checker.fact_check("Some headline").await;

    assert!(result.starts_with(ERROR_PREFIX), "got: {}", result);
    assert!(result.contains("HTTP error"));
    assert!(!result.contains(API_KEY));
}
