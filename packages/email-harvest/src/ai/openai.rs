//! [`EmailExtractor`] backed by an OpenAI-compatible chat completions API.
//!
//! ```rust,ignore
//! use email_harvest::{HarvestConfig, OpenAIExtractor};
//!
//! let config = HarvestConfig::from_env()?;
//! let extractor = OpenAIExtractor::from_config(&config);
//! let emails = extractor.extract("https://acme.io").await?;
//! ```

use async_trait::async_trait;
use openai_client::{OpenAIClient, StructuredOutput, StructuredRequest};
use tracing::debug;

use crate::ai::prompts::{format_extract_prompt, EXTRACT_EMAILS_SYSTEM};
use crate::config::{HarvestConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::error::ExternalServiceError;
use crate::pipeline::response::{parse_emails_response, EmailsResponse};
use crate::traits::EmailExtractor;

/// OpenAI-based email extractor.
///
/// One structured-output request per URL, no retries, transport-default
/// timeouts.
#[derive(Debug, Clone)]
pub struct OpenAIExtractor {
    client: OpenAIClient,
    model: String,
    temperature: f32,
}

impl OpenAIExtractor {
    /// Wrap an already-configured client with default model settings.
    pub fn new(client: OpenAIClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Build the client and settings from loaded configuration.
    pub fn from_config(config: &HarvestConfig) -> Self {
        let client = OpenAIClient::new(config.credentials.api_key.expose())
            .with_base_url(&config.credentials.base_url);

        Self::new(client)
            .with_model(&config.model)
            .with_temperature(config.temperature)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_for(&self, url: &str) -> StructuredRequest {
        StructuredRequest::new(
            &self.model,
            EXTRACT_EMAILS_SYSTEM,
            format_extract_prompt(url),
            EmailsResponse::strict_schema(),
        )
        .temperature(self.temperature)
        .schema_name("email_extraction")
    }
}

#[async_trait]
impl EmailExtractor for OpenAIExtractor {
    async fn extract(&self, url: &str) -> Result<Vec<String>, ExternalServiceError> {
        if url.is_empty() {
            return Ok(Vec::new());
        }

        let body = self.client.structured_output(self.request_for(url)).await?;
        let emails = parse_emails_response(body.as_deref())
            .map_err(|e| ExternalServiceError::new(e.to_string()))?;

        debug!(url = %url, count = emails.len(), "extracted emails");
        Ok(emails)
    }
}
