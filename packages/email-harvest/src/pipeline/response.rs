//! Validation of the AI service's structured response.
//!
//! Kept apart from the transport: the caller hands over the raw body text
//! and gets back a filtered address list or a parse error.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

/// Shape requested from the model.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EmailsResponse {
    /// A list of email addresses found on the page.
    pub emails: Vec<String>,
}

/// The body was not JSON at all.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("unparseable response: {0}")]
    Unparseable(#[from] serde_json::Error),
}

/// Minimal address check applied to model output.
pub fn looks_like_email(candidate: &str) -> bool {
    candidate.contains('@')
}

/// Turn a response body into the list of addresses it carries.
///
/// - missing or blank body: no addresses
/// - text that is not JSON: [`ResponseError::Unparseable`]
/// - JSON without an `emails` array: no addresses (logged)
/// - entries that are not strings or lack `@` are dropped
pub fn parse_emails_response(body: Option<&str>) -> Result<Vec<String>, ResponseError> {
    let text = match body.map(openai_client::strip_code_blocks) {
        Some(text) if !text.is_empty() => text,
        _ => {
            warn!("AI service returned an empty response");
            return Ok(Vec::new());
        }
    };

    let value: Value = serde_json::from_str(text)?;

    let Some(entries) = value.get("emails").and_then(Value::as_array) else {
        error!(response = %value, "invalid JSON structure received from AI service");
        return Ok(Vec::new());
    };

    let emails: Vec<String> = entries
        .iter()
        .filter_map(Value::as_str)
        .filter(|e| looks_like_email(e))
        .map(str::to_string)
        .collect();

    if emails.len() < entries.len() {
        warn!(
            dropped = entries.len() - emails.len(),
            "discarded entries that do not look like email addresses"
        );
    }

    Ok(emails)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_entries_without_at() {
        let body = r#"{"emails": ["a@b.com", "not-an-email", "c@d.com"]}"#;
        assert_eq!(
            parse_emails_response(Some(body)).unwrap(),
            vec!["a@b.com", "c@d.com"]
        );
    }

    #[test]
    fn test_empty_body_is_no_emails() {
        assert!(parse_emails_response(None).unwrap().is_empty());
        assert!(parse_emails_response(Some("")).unwrap().is_empty());
        assert!(parse_emails_response(Some("  \n ")).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_structure_degrades_to_empty() {
        assert!(parse_emails_response(Some(r#"{"emails": "a@b.com"}"#))
            .unwrap()
            .is_empty());
        assert!(parse_emails_response(Some(r#"{"addresses": ["a@b.com"]}"#))
            .unwrap()
            .is_empty());
        assert!(parse_emails_response(Some(r#"["a@b.com"]"#)).unwrap().is_empty());
        assert!(parse_emails_response(Some("null")).unwrap().is_empty());
    }

    #[test]
    fn test_non_string_entries_dropped() {
        let body = r#"{"emails": ["a@b.com", 42, null, {"x": "y@z"}]}"#;
        assert_eq!(parse_emails_response(Some(body)).unwrap(), vec!["a@b.com"]);
    }

    #[test]
    fn test_unparseable_text_is_error() {
        let err = parse_emails_response(Some("Sorry, I cannot browse the web.")).unwrap_err();
        assert!(matches!(err, ResponseError::Unparseable(_)));
    }

    #[test]
    fn test_code_fenced_json_accepted() {
        let body = "```json\n{\"emails\": [\"info@acme.io\"]}\n```";
        assert_eq!(parse_emails_response(Some(body)).unwrap(), vec!["info@acme.io"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let body = r#"{"emails": ["a@b.com", "a@b.com"]}"#;
        assert_eq!(parse_emails_response(Some(body)).unwrap().len(), 2);
    }
}
