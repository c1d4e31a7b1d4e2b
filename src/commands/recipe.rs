//! Recipe Import Command
//!
//! One `generateContent` call per import; no retry, no timeout.

use gloo_net::http::Request;

use grocery_core::recipe::{build_request, ingredients_from_response, request_url};
use grocery_core::{GeminiConfig, ImportError};

pub async fn fetch_recipe_ingredients(config: &GeminiConfig, recipe_url: &str) -> Result<Vec<String>, ImportError> {
    let response = Request::post(&request_url(config))
        .json(&build_request(recipe_url))
        .map_err(|e| ImportError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ImportError::Request(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ImportError::Request(e.to_string()))?;

    ingredients_from_response(status, &body)
}
