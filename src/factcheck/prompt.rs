// Prompt construction and input validation
// Author: kelexine (https://github.com/kelexine)

use crate::error::{FactCheckError, Result};

const INSTRUCTIONS: &[&str] = &[
    "Analyze the following text for factual accuracy and potential misinformation.",
    "Identify the key claim and use Google Search to verify it.",
    "Your response MUST be formatted using Markdown headings (**Key Claim:**, **Fact Check:**, **Conclusion:**) and bullet points (*) for all explanations and details.",
];

/// Embed the user's text into the fact-check instruction template.
///
/// The text is inserted verbatim after `Text to analyze: `.
pub fn build_prompt(text: &str) -> String {
    let mut prompt = INSTRUCTIONS.join(" ");
    prompt.push_str(" Text to analyze: ");
    prompt.push_str(text);
    prompt
}

/// Caller-side check run before the handler is invoked.
///
/// Returns the input unchanged when it has any non-whitespace character.
pub fn validate_input(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(FactCheckError::EmptyInput);
    }
    Ok(text)
}
