/*
[INPUT]:  Error sources (HTTP, API, serialization)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the task API client
#[derive(Error, Debug)]
pub enum TaskApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {code}): {message}")]
    Api { code: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TaskApiError {
    /// Check if the error is a not-found response
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskApiError::Api { code: 404, .. })
    }

    /// Create an API error from status code and message.
    /// An empty body falls back to the status line so the user never sees a blank error.
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string();
        }
        TaskApiError::Api {
            code: status.as_u16(),
            message,
        }
    }
}

/// Result type alias for task API operations
pub type Result<T> = std::result::Result<T, TaskApiError>;
