//! Candidate URLs from CSV text.

use tracing::debug;

const ALLOWED_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Extract candidate URLs from the first column of CSV text.
///
/// Per line (`\n` or `\r\n`): take the text before the first comma, trim it,
/// then remove every `"`. Lines whose value does not start with `http://` or
/// `https://` are dropped silently. Order and duplicates are preserved.
///
/// A leading UTF-8 byte order mark is ignored.
///
/// An empty result is returned as-is; callers decide that it is an error.
pub fn parse_urls(raw_text: &str) -> Vec<String> {
    let text = raw_text.strip_prefix('\u{FEFF}').unwrap_or(raw_text);

    let urls: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(first_field_url)
        .collect();

    debug!(count = urls.len(), "parsed URLs from CSV text");
    urls
}

fn first_field_url(line: &str) -> Option<String> {
    let field = line.split(',').next().unwrap_or_default();
    let value = field.trim().replace('"', "");

    ALLOWED_PREFIXES
        .iter()
        .any(|prefix| value.starts_with(prefix))
        .then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_passes_through() {
        assert_eq!(parse_urls("http://a\nhttps://b"), vec!["http://a", "https://b"]);
    }

    #[test]
    fn test_quotes_columns_and_invalid_lines() {
        let text = "\"http://a.com\", foo\nnotaurl\nhttps://b.com,bar\n";
        assert_eq!(parse_urls(text), vec!["http://a.com", "https://b.com"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "url,name\r\nhttps://a.com,A\r\nhttps://b.com,B\r\n";
        assert_eq!(parse_urls(text), vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_empty_and_all_invalid() {
        assert!(parse_urls("").is_empty());
        assert!(parse_urls("website\nftp://files.example\n\n  ,https://late.com").is_empty());
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert!(parse_urls("HTTPS://shout.com\nHttp://mixed.com").is_empty());
    }

    #[test]
    fn test_quotes_stripped_anywhere() {
        assert_eq!(parse_urls("https://a\"b\".com"), vec!["https://ab.com"]);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let text = "https://b.com\nhttps://a.com\nhttps://b.com";
        assert_eq!(
            parse_urls(text),
            vec!["https://b.com", "https://a.com", "https://b.com"]
        );
    }

    #[test]
    fn test_leading_byte_order_mark_ignored() {
        let text = "\u{FEFF}https://a.com,A\r\nhttps://b.com,B\r\n";
        assert_eq!(parse_urls(text), vec!["https://a.com", "https://b.com"]);
        assert_eq!(parse_urls("\u{FEFF}\"https://q.com\""), vec!["https://q.com"]);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(parse_urls("   https://a.com   ,x"), vec!["https://a.com"]);
    }
}
