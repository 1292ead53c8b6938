// newscheck - News snippet fact-checker backed by Gemini with Google Search grounding
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod factcheck;
pub mod gemini;
pub mod metrics;
pub mod models;
pub mod server;
pub mod utils;
