// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::IntoResponse;
use newscheck::error::FactCheckError;
use newscheck::factcheck::{format_error, ERROR_PREFIX};

#[test]
fn test_error_display_messages() {
    let errors = vec![
        FactCheckError::Config("missing key".to_string()),
        FactCheckError::EmptyInput,
        FactCheckError::Upstream {
            status: 500,
            message: "Internal".to_string(),
        },
        FactCheckError::Decode("expected value".to_string()),
        FactCheckError::InvalidRequest("Bad request".to_string()),
        FactCheckError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_empty_input_is_the_user_warning() {
    assert_eq!(
        FactCheckError::EmptyInput.to_string(),
        "Please enter text to fact-check."
    );
}

#[test]
fn test_upstream_error() {
    let error = FactCheckError::Upstream {
        status: 403,
        message: "API key not valid.".to_string(),
    };
    assert_eq!(error.to_string(), "HTTP 403: API key not valid.");
    assert!(error.is_upstream());
    assert_eq!(error.kind(), "http_status");
}

#[test]
fn test_all_upstream_failures_share_error_prefix() {
    let errors = vec![
        FactCheckError::Upstream {
            status: 502,
            message: "Bad Gateway".to_string(),
        },
        FactCheckError::Decode("EOF while parsing".to_string()),
    ];

    for error in errors {
        let message = format_error(&error);
        assert!(message.starts_with(ERROR_PREFIX));
        assert!(message.contains(&error.to_string()));
    }
}

#[test]
fn test_http_status_mapping() {
    let cases = vec![
        (FactCheckError::EmptyInput, StatusCode::BAD_REQUEST),
        (
            FactCheckError::InvalidRequest("x".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            FactCheckError::Upstream {
                status: 500,
                message: "x".to_string(),
            },
            StatusCode::BAD_GATEWAY,
        ),
        (
            FactCheckError::Decode("x".to_string()),
            StatusCode::BAD_GATEWAY,
        ),
        (FactCheckError::Config("x".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        (FactCheckError::Internal("x".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected) in cases {
        assert_eq!(error.into_response().status(), expected);
    }
}
