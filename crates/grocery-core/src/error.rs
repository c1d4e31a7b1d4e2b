//! Error Types
//!
//! None of these are fatal; the UI turns every one into a toast or a log line.

/// Errors produced by recipe import
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    /// No Gemini API key was configured at build time.
    #[error("recipe import is not configured: missing API key")]
    MissingApiKey,

    /// The HTTP request could not be sent or its body could not be read.
    #[error("API request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The API response body was not the expected JSON shape.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The model's reply contained no `[...]` span.
    #[error("no JSON array found in model reply")]
    NoArrayFound,

    /// The bracketed span was not an array of strings.
    #[error("ingredient array parse failed: {0}")]
    ArrayParse(String),
}

/// Errors produced while restoring a share link
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShareError {
    #[error("malformed items payload: {0}")]
    Json(String),
}
