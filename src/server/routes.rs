// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{fact_check_handler, health_handler, metrics_handler};
use super::middleware::{request_id_layers, track_requests};
use crate::factcheck::FactChecker;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<FactChecker>,
}

pub fn create_router(checker: FactChecker) -> Router {
    let state = AppState {
        checker: Arc::new(checker),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/v1/fact-check", post(fact_check_handler))
        .route_layer(middleware::from_fn(track_requests))
        // Snippets are short; anything larger is not a headline
        .layer(tower_http::limit::RequestBodyLimitLayer::new(64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
