//! Axum-based HTTP service for newscheck.
//!
//! Exposes the fact-check handler as a small JSON API for front ends that
//! render the verdict themselves.
//!
//! # Components
//!
//! - `handlers`: Endpoint implementations (fact-check, health, metrics).
//! - `middleware`: Request ID tracking and per-route request metrics.
//! - `routes`: The router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{FactCheckRequest, FactCheckResponse, HealthResponse};
pub use routes::{create_router, AppState};
