//! Prompts for simulated-crawl email extraction.

/// System prompt for email extraction.
pub const EXTRACT_EMAILS_SYSTEM: &str = "You are a specialized AI that simulates a web crawler \
and email address extractor. You answer only with JSON matching the requested schema.";

/// User prompt for email extraction.
pub const EXTRACT_EMAILS_PROMPT: &str = r#"Analyze the likely public-facing content of the ENTIRE website accessible from the provided URL, as if you were performing a deep crawl (depth = -1), following links to all other pages within the same domain (like "Contact", "About", "Team" pages).

From this analysis, identify and extract any email addresses that would likely be present across the analyzed scope.

URL to analyze: "{url}"

Rules:
1. Only return valid email address formats.
2. Do not invent email addresses. If none are likely to be found, return an empty list.
3. If the URL appears invalid, non-existent, or is a common placeholder (e.g., example.com, yoursite.com), return an empty list.
4. Your final output MUST be a JSON object conforming to the specified schema.

Example for a successful extraction: {"emails": ["contact@company.com", "support@company.com"]}
Example for no emails found: {"emails": []}"#;

/// Format the extraction prompt for one URL.
pub fn format_extract_prompt(url: &str) -> String {
    EXTRACT_EMAILS_PROMPT.replace("{url}", url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_url_once() {
        let prompt = format_extract_prompt("https://acme.io");
        assert_eq!(prompt.matches("https://acme.io").count(), 1);
        assert!(!prompt.contains("{url}"));
        assert!(prompt.contains(r#"{"emails": []}"#));
    }
}
