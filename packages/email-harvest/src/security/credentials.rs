//! Credential handling with secure memory.
//!
//! Uses the `secrecy` crate so the API key never reaches logs or debug output.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// A string that prints as `[REDACTED]`.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self(SecretBox::new(value.into_boxed_str()))
    }

    /// Expose the secret value.
    ///
    /// Only call this at the point of use (building the HTTP client).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Endpoint and key for the AI extraction service.
#[derive(Clone)]
pub struct AICredentials {
    pub api_key: SecretString,

    /// API base URL of an OpenAI-compatible endpoint
    pub base_url: String,
}

impl AICredentials {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            base_url: base_url.into(),
        }
    }
}

impl fmt::Debug for AICredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AICredentials")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
