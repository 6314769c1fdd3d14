//! Per-URL outcomes and the keyed result map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Result of one extraction for one URL.
///
/// Serializes as `{"status":"success","emails":[..]}` or
/// `{"status":"error","message":".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExtractionOutcome {
    /// Extraction finished; `emails` may be empty.
    Success { emails: Vec<String> },

    /// Extraction failed with a human-readable cause.
    #[serde(rename = "error")]
    Failure { message: String },
}

impl ExtractionOutcome {
    pub fn success(emails: Vec<String>) -> Self {
        Self::Success { emails }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Emails for a success, `None` for a failure.
    pub fn emails(&self) -> Option<&[String]> {
        match self {
            Self::Success { emails } => Some(emails),
            Self::Failure { .. } => None,
        }
    }
}

/// Outcomes keyed by URL for one batch run.
///
/// Keys keep the position of their first insertion; a later insert for the
/// same URL replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultMap(IndexMap<String, ExtractionOutcome>);

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, url: String, outcome: ExtractionOutcome) {
        self.0.insert(url, outcome);
    }

    pub fn get(&self, url: &str) -> Option<&ExtractionOutcome> {
        self.0.get(url)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtractionOutcome)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of distinct URLs in the run.
    pub fn source_count(&self) -> usize {
        self.0.len()
    }

    /// Total addresses across all successful outcomes.
    pub fn total_emails(&self) -> usize {
        self.0
            .values()
            .filter_map(ExtractionOutcome::emails)
            .map(<[String]>::len)
            .sum()
    }

    /// True when at least one success carries a non-empty list.
    pub fn has_emails(&self) -> bool {
        self.0
            .values()
            .filter_map(ExtractionOutcome::emails)
            .any(|emails| !emails.is_empty())
    }

    /// Failed URLs with their messages, in map order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|(url, outcome)| match outcome {
            ExtractionOutcome::Failure { message } => Some((url.as_str(), message.as_str())),
            ExtractionOutcome::Success { .. } => None,
        })
    }
}

impl<'a> IntoIterator for &'a ResultMap {
    type Item = (&'a String, &'a ExtractionOutcome);
    type IntoIter = indexmap::map::Iter<'a, String, ExtractionOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ResultMap {
        let mut map = ResultMap::new();
        map.insert(
            "https://a.com".into(),
            ExtractionOutcome::success(vec!["x@a.com".into(), "y@a.com".into()]),
        );
        map.insert("https://b.com".into(), ExtractionOutcome::success(vec![]));
        map.insert("https://c.com".into(), ExtractionOutcome::failure("boom"));
        map
    }

    #[test]
    fn test_summary_counts() {
        let map = sample();
        assert_eq!(map.source_count(), 3);
        assert_eq!(map.total_emails(), 2);
        assert!(map.has_emails());
        assert_eq!(map.failures().collect::<Vec<_>>(), vec![("https://c.com", "boom")]);
    }

    #[test]
    fn test_has_emails_false_when_only_empty_or_failed() {
        let mut map = ResultMap::new();
        map.insert("https://b.com".into(), ExtractionOutcome::success(vec![]));
        map.insert("https://c.com".into(), ExtractionOutcome::failure("boom"));
        assert!(!map.has_emails());
        assert_eq!(map.total_emails(), 0);
    }

    #[test]
    fn test_reinsert_keeps_first_position() {
        let mut map = sample();
        map.insert("https://a.com".into(), ExtractionOutcome::failure("late"));

        assert_eq!(map.len(), 3);
        assert_eq!(map.urls().next(), Some("https://a.com"));
        assert_eq!(
            map.get("https://a.com"),
            Some(&ExtractionOutcome::failure("late"))
        );
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "https://a.com": {"status": "success", "emails": ["x@a.com", "y@a.com"]},
                "https://b.com": {"status": "success", "emails": []},
                "https://c.com": {"status": "error", "message": "boom"}
            })
        );
    }
}
