//! Minimal client for OpenAI-compatible chat completion endpoints.
//!
//! Only the calls the workspace needs: plain chat completions and
//! schema-constrained structured output. Any gateway that speaks the
//! `/chat/completions` dialect works through [`OpenAIClient::with_base_url`].
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, StructuredOutput, StructuredRequest};
//!
//! let client = OpenAIClient::from_env()?;
//! let request = StructuredRequest::new("gpt-4o-mini", system, user, Emails::strict_schema())
//!     .temperature(0.1);
//!
//! // `None` when the model answered with an empty body
//! let body: Option<String> = client.structured_output(request).await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{OpenAIError, Result};
pub use schema::StructuredOutput;
pub use types::*;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for an OpenAI-compatible API.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAIClient {
    /// Create a client with the given API key against the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(OpenAIError::Config("OPENAI_API_KEY not set".into())),
        }
    }

    /// Set a custom base URL (gateways, proxies, local mocks).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();
        let response = self.post_chat(&request).await?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "chat completion"
        );
        Ok(response)
    }

    /// Structured output with a JSON schema.
    ///
    /// Returns the raw JSON text of the first choice, or `None` when the
    /// model produced an empty body. Decoding is left to the caller.
    pub async fn structured_output(&self, request: StructuredRequest) -> Result<Option<String>> {
        let start = std::time::Instant::now();
        let response = self.post_chat(&request).await?;

        debug!(
            model = %request.model,
            schema = %request.response_format.json_schema.name,
            duration_ms = start.elapsed().as_millis(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "structured output"
        );
        Ok(response.content)
    }

    async fn post_chat<B: Serialize>(&self, body: &B) -> Result<ChatResponse> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "chat completion request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "chat completion API error");
            return Err(OpenAIError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let raw: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        Ok(raw.into_response())
    }
}
