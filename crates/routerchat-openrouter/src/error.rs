//! Error types for OpenRouter operations.

use thiserror::Error;

/// Result type alias for OpenRouter operations.
pub type OpenRouterResult<T> = Result<T, OpenRouterError>;

/// Errors related to OpenRouter API operations.
#[derive(Debug, Error)]
pub enum OpenRouterError {
    /// API request failed with an HTTP error status.
    #[error("OpenRouter API request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Upstream error message (or `HTTP <status>` when none was given)
        message: String,
    },

    /// The request hit the client-side timeout.
    #[error("request timed out")]
    Timeout,

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// API returned an invalid or unexpected response.
    #[error("invalid response from OpenRouter: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// No API key in the environment and no key file at any known location.
    #[error("API key file not found; set OPENROUTER_API_KEY or create api_keys.env")]
    KeyFileNotFound,

    /// A key file exists but has no `openrouter_api_key=` line.
    #[error("openrouter_api_key not found in {path}")]
    KeyMissing {
        /// Path of the file that was searched
        path: String,
    },

    /// The key file could not be read.
    #[error("failed to read key file: {0}")]
    KeyFileRead(#[from] std::io::Error),
}

impl OpenRouterError {
    /// The message shown to API callers in the error envelope.
    ///
    /// Transport failures get stable, user-facing phrasings; upstream
    /// application errors pass the upstream message through.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Timeout => "Request timed out. Please try again.".to_string(),
            Self::Network(e) => format!("Network error: {e}"),
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// True for errors caused by missing/unreadable credentials rather than
    /// the upstream API.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::KeyFileNotFound | Self::KeyMissing { .. } | Self::KeyFileRead(_)
        )
    }
}
