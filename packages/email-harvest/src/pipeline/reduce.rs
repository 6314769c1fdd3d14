use crate::types::{ExtractionOutcome, ResultMap};

/// Fold settled pairs into a map keyed by URL.
///
/// The last pair for a repeated URL wins; the key keeps its first position.
pub fn reduce<I>(pairs: I) -> ResultMap
where
    I: IntoIterator<Item = (String, ExtractionOutcome)>,
{
    let mut map = ResultMap::new();
    for (url, outcome) in pairs {
        map.insert(url, outcome);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_distinct_url() {
        let map = reduce(vec![
            ("https://a.com".to_string(), ExtractionOutcome::success(vec!["x@a.com".into()])),
            ("https://b.com".to_string(), ExtractionOutcome::failure("down")),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("https://a.com"),
            Some(&ExtractionOutcome::success(vec!["x@a.com".into()]))
        );
        assert_eq!(map.get("https://b.com"), Some(&ExtractionOutcome::failure("down")));
    }

    #[test]
    fn test_last_write_wins() {
        let map = reduce(vec![
            ("https://a.com".to_string(), ExtractionOutcome::failure("first")),
            ("https://b.com".to_string(), ExtractionOutcome::success(vec![])),
            ("https://a.com".to_string(), ExtractionOutcome::success(vec!["y@a.com".into()])),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("https://a.com"),
            Some(&ExtractionOutcome::success(vec!["y@a.com".into()]))
        );
        assert_eq!(map.urls().collect::<Vec<_>>(), vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(reduce(Vec::new()).is_empty());
    }
}
