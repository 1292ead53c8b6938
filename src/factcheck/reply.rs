// Typed extraction of the model reply
// Author: kelexine (https://github.com/kelexine)

use crate::models::gemini::{Candidate, GenerateContentResponse};
use serde::Serialize;
use std::fmt;

/// The first response level that was absent when looking for the reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    Candidates,
    Content,
    Parts,
    Text,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissingField::Candidates => "candidates",
            MissingField::Content => "content",
            MissingField::Parts => "parts",
            MissingField::Text => "text",
        };
        f.write_str(name)
    }
}

/// Result of reading `candidates[0].content.parts[0].text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyExtraction {
    Text(String),
    Missing(MissingField),
}

impl ReplyExtraction {
    /// Reply text, or an empty string when any level is missing.
    pub fn into_text(self) -> String {
        match self {
            ReplyExtraction::Text(text) => text,
            ReplyExtraction::Missing(_) => String::new(),
        }
    }
}

/// Read the first candidate's first text part.
///
/// An empty list counts as missing, the same as an absent key.
pub fn extract_reply(response: &GenerateContentResponse) -> ReplyExtraction {
    let Some(candidate) = response.candidates.as_deref().and_then(<[Candidate]>::first) else {
        return ReplyExtraction::Missing(MissingField::Candidates);
    };
    let Some(content) = candidate.content.as_ref() else {
        return ReplyExtraction::Missing(MissingField::Content);
    };
    let Some(part) = content.parts.as_deref().and_then(|parts| parts.first()) else {
        return ReplyExtraction::Missing(MissingField::Parts);
    };
    match &part.text {
        Some(text) => ReplyExtraction::Text(text.clone()),
        None => ReplyExtraction::Missing(MissingField::Text),
    }
}

/// A web page the search tool grounded the first candidate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub title: Option<String>,
    pub uri: String,
}

/// Web sources from the first candidate's grounding metadata, in order, deduplicated by URI.
pub fn grounding_sources(response: &GenerateContentResponse) -> Vec<Source> {
    let Some(grounding) = response
        .candidates
        .as_deref()
        .and_then(<[Candidate]>::first)
        .and_then(|c| c.grounding_metadata.as_ref())
    else {
        return Vec::new();
    };

    let mut sources: Vec<Source> = Vec::new();
    for web in grounding.grounding_chunks.iter().filter_map(|c| c.web.as_ref()) {
        let Some(uri) = web.uri.as_ref() else { continue };
        if sources.iter().any(|s| &s.uri == uri) {
            continue;
        }
        sources.push(Source {
            title: web.title.clone(),
            uri: uri.clone(),
        });
    }
    sources
}
