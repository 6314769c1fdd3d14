//! Error types for the OpenAI-compatible client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// Client errors.
///
/// Every variant carries the human-readable cause; callers that only need a
/// message can use [`OpenAIError::message`].
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Missing API key or invalid client settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failed before a response was received
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the endpoint
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OpenAIError {
    /// The underlying cause without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Config(m) | Self::Network(m) | Self::Parse(m) => m,
            Self::Api { message, .. } => message,
        }
    }

    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
