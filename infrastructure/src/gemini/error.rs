//! Error types for the Gemini adapter

use quizzly_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("Response contained no text")]
    EmptyResponse,
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Transport(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            GeminiError::Api { status: 404, message } => GatewayError::ModelNotAvailable(message),
            GeminiError::Api { status, message } => GatewayError::HttpStatus { status, message },
            other => GatewayError::RequestFailed(other.to_string()),
        }
    }
}
