//! Utility functions and helpers for newscheck.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and API key redaction.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
