//! Data models for the Gemini Generative Language API.
//!
//! Request and response bodies for the `generateContent` endpoint, including
//! the Google Search grounding tool and its metadata.

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;

pub use gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GroundingMetadata, Part,
    Tool,
};
