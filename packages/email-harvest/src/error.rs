//! Typed errors for the harvest library.
//!
//! Uses `thiserror` for library errors (the binary reports through `anyhow`).
//! Only [`InputError`] and [`ConfigurationError`] ever abort an operation;
//! [`ExternalServiceError`] is captured per URL inside an outcome.

use std::path::PathBuf;

use thiserror::Error;

/// Message used when the underlying cause carried no text.
pub const UNKNOWN_SERVICE_ERROR: &str =
    "An unknown error occurred while contacting the AI service.";

/// Whole-operation errors surfaced before any extraction runs.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// User-supplied input is structurally invalid.
#[derive(Debug, Error)]
pub enum InputError {
    /// File name does not end in `.csv`
    #[error("Invalid file type. Please upload a .csv file. (got: {name})")]
    NotCsv { name: String },

    /// No line of the CSV yielded an http(s) URL
    #[error("No valid URLs found in the CSV file.")]
    NoValidUrls,

    /// Single-URL submission was blank
    #[error("Please enter a URL.")]
    EmptyUrl,

    /// The CSV file could not be read
    #[error("Failed to read the file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Required service settings are absent or malformed at startup.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("The {var} environment variable is not set. Please configure it to use the application.")]
    Missing { var: &'static str },

    #[error("The {var} environment variable is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// The AI collaborator failed for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to extract emails. AI service error: {message}")]
pub struct ExternalServiceError {
    message: String,
}

impl ExternalServiceError {
    /// Wrap an underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying cause, without the wrapping prefix.
    pub fn cause(&self) -> &str {
        &self.message
    }

    /// Message recorded in a failed outcome.
    ///
    /// Falls back to [`UNKNOWN_SERVICE_ERROR`] when the cause is blank.
    pub fn outcome_message(&self) -> String {
        if self.message.trim().is_empty() {
            UNKNOWN_SERVICE_ERROR.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<openai_client::OpenAIError> for ExternalServiceError {
    fn from(err: openai_client::OpenAIError) -> Self {
        Self::new(err.to_string())
    }
}

/// Result type alias for whole-operation calls.
pub type Result<T> = std::result::Result<T, HarvestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_message_wraps_cause() {
        let err = ExternalServiceError::new("quota exceeded");
        assert_eq!(
            err.outcome_message(),
            "Failed to extract emails. AI service error: quota exceeded"
        );
        assert_eq!(err.cause(), "quota exceeded");
    }

    #[test]
    fn test_blank_cause_uses_generic_message() {
        let err = ExternalServiceError::new("  ");
        assert_eq!(err.outcome_message(), UNKNOWN_SERVICE_ERROR);
    }

    #[test]
    fn test_openai_error_converts() {
        let err: ExternalServiceError =
            openai_client::OpenAIError::Network("connection reset".into()).into();
        assert_eq!(err.cause(), "Network error: connection reset");
    }

    #[test]
    fn test_harvest_error_is_transparent() {
        let err = HarvestError::from(InputError::NoValidUrls);
        assert_eq!(err.to_string(), "No valid URLs found in the CSV file.");

        let err = HarvestError::from(ConfigurationError::Missing {
            var: "OPENAI_API_KEY",
        });
        assert!(matches!(err, HarvestError::Configuration(_)));
    }

    #[test]
    fn test_missing_config_message_names_variable() {
        let err = ConfigurationError::Missing {
            var: "OPENAI_API_KEY",
        };
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
