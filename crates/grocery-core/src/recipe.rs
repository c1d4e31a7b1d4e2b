//! Recipe Import
//!
//! Wire types and pure parsing for the Gemini `generateContent` call. The HTTP
//! round trip itself lives in the UI's browser bindings.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::ImportError;

// =============================================================================
// REQUEST
// =============================================================================

#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

pub fn build_prompt(recipe_url: &str) -> String {
    format!(
        "Extract the ingredient list from the recipe at {}. \
         Return ONLY a JSON array of short ingredient names as strings, \
         without quantities or units, for example [\"flour\", \"eggs\", \"milk\"]. \
         Do not include any other text.",
        recipe_url.trim()
    )
}

pub fn build_request(recipe_url: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: Some(build_prompt(recipe_url)),
            }],
        }],
    }
}

/// `POST` target; the key travels as a query parameter
pub fn request_url(config: &GeminiConfig) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        config.endpoint,
        config.model,
        crate::encoding::encode_component(&config.api_key)
    )
}

// =============================================================================
// RESPONSE
// =============================================================================

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Concatenated text of the first candidate
pub fn parse_response_text(json: &str) -> Result<String, ImportError> {
    let response: GenerateResponse =
        serde_json::from_str(json).map_err(|e| ImportError::ApiParse(e.to_string()))?;

    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| ImportError::ApiParse("response has no candidates".to_string()))?;

    Ok(content.parts.into_iter().filter_map(|p| p.text).collect())
}

fn array_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("array pattern is valid"))
}

/// Pull the `[...]` span out of free-form model text and parse it
pub fn extract_ingredients(text: &str) -> Result<Vec<String>, ImportError> {
    let span = array_pattern()
        .find(text)
        .ok_or(ImportError::NoArrayFound)?;

    serde_json::from_str::<Vec<String>>(span.as_str()).map_err(|e| ImportError::ArrayParse(e.to_string()))
}

/// Full response handling: HTTP status, body shape, array extraction
pub fn ingredients_from_response(status: u16, body: &str) -> Result<Vec<String>, ImportError> {
    if !(200..300).contains(&status) {
        return Err(ImportError::ApiResponse {
            status,
            body: body.to_string(),
        });
    }
    let text = parse_response_text(body)?;
    extract_ingredients(&text)
}
