use std::env;

use crate::error::ConfigurationError;
use crate::security::AICredentials;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Settings for the AI extraction service, loaded from environment variables.
///
/// | Variable | Required | Default |
/// |---|---|---|
/// | `OPENAI_API_KEY` | yes | |
/// | `OPENAI_BASE_URL` | no | `https://api.openai.com/v1` |
/// | `EMAIL_HARVEST_MODEL` | no | `gpt-4o-mini` |
/// | `EMAIL_HARVEST_TEMPERATURE` | no | `0.1` |
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub credentials: AICredentials,
    pub model: String,
    pub temperature: f32,
}

impl HarvestConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigurationError> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigurationError::Missing {
            var: "OPENAI_API_KEY",
        })?;
        let base_url = get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = get("EMAIL_HARVEST_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match get("EMAIL_HARVEST_TEMPERATURE") {
            None => DEFAULT_TEMPERATURE,
            Some(raw) => {
                let value = raw.trim().parse::<f32>().map_err(|e| ConfigurationError::Invalid {
                    var: "EMAIL_HARVEST_TEMPERATURE",
                    reason: e.to_string(),
                })?;
                if !(0.0..=2.0).contains(&value) {
                    return Err(ConfigurationError::Invalid {
                        var: "EMAIL_HARVEST_TEMPERATURE",
                        reason: format!("{} is outside 0.0..=2.0", value),
                    });
                }
                value
            }
        };

        Ok(Self {
            credentials: AICredentials::new(api_key, base_url),
            model,
            temperature,
        })
    }
}
