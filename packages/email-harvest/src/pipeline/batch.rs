//! One submission of URLs processed together.

use crate::pipeline::{dispatch_all, reduce};
use crate::traits::EmailExtractor;
use crate::types::ResultMap;

/// Completion state of a [`BatchRun`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Pending,
    Settled(ResultMap),
}

/// The URLs of one submission and where their extraction stands.
///
/// Lives only for the duration of a run; a new submission builds a new one.
#[derive(Debug, Clone)]
pub struct BatchRun {
    urls: Vec<String>,
    state: RunState,
}

impl BatchRun {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            state: RunState::Pending,
        }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.state, RunState::Settled(_))
    }

    /// Dispatch every URL and reduce the outcomes.
    ///
    /// A run that has already settled is returned unchanged.
    pub async fn settle<E>(self, extractor: &E) -> Self
    where
        E: EmailExtractor + ?Sized,
    {
        if self.is_settled() {
            return self;
        }

        let results = reduce(dispatch_all(extractor, &self.urls).await);
        Self {
            urls: self.urls,
            state: RunState::Settled(results),
        }
    }

    /// The result map, if the run has settled.
    pub fn into_results(self) -> Option<ResultMap> {
        match self.state {
            RunState::Settled(results) => Some(results),
            RunState::Pending => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockExtractor;

    #[test]
    fn test_empty_run_settles_to_empty_map() {
        let mock = MockExtractor::new();
        let run = tokio_test::block_on(BatchRun::new(Vec::new()).settle(&mock));

        assert!(run.is_settled());
        assert!(run.urls().is_empty());
        assert_eq!(run.into_results(), Some(ResultMap::new()));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_pending_run_has_no_results() {
        let run = BatchRun::new(vec!["https://a.com".to_string()]);
        assert_eq!(run.urls(), ["https://a.com".to_string()]);
        assert!(run.into_results().is_none());
    }
}
