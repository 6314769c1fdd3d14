//! Testing utilities including a scripted extractor.
//!
//! Useful for exercising the batch pipeline without making real AI calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::ExternalServiceError;
use crate::pipeline::looks_like_email;
use crate::traits::EmailExtractor;

/// Scripted reply for one URL.
#[derive(Debug, Clone)]
pub enum MockReply {
    Emails(Vec<String>),
    Fail(String),
}

/// A mock extractor with per-URL replies, delays and call tracking.
///
/// URLs without a scripted reply succeed with no addresses.
#[derive(Default, Clone)]
pub struct MockExtractor {
    replies: Arc<RwLock<HashMap<String, MockReply>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<RwLock<Vec<String>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed for `url` with the given addresses.
    pub fn with_emails<I, S>(self, url: impl Into<String>, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let emails = emails.into_iter().map(Into::into).collect();
        self.replies
            .write()
            .unwrap()
            .insert(url.into(), MockReply::Emails(emails));
        self
    }

    /// Fail for `url` with the given cause.
    pub fn with_failure(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .insert(url.into(), MockReply::Fail(message.into()));
        self
    }

    /// Hold the reply for `url` back by `delay`.
    pub fn with_delay(self, url: impl Into<String>, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(url.into(), delay);
        self
    }

    /// URLs in the order their calls started.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Highest number of calls observed in progress at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailExtractor for MockExtractor {
    async fn extract(&self, url: &str) -> Result<Vec<String>, ExternalServiceError> {
        if url.is_empty() {
            return Ok(Vec::new());
        }

        self.calls.write().unwrap().push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        // Suspend at least once so sibling calls can start before this one settles.
        tokio::task::yield_now().await;

        let delay = self.delays.read().unwrap().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.read().unwrap().get(url).cloned();
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match reply {
            Some(MockReply::Emails(emails)) => Ok(emails
                .into_iter()
                .filter(|e| looks_like_email(e))
                .collect()),
            Some(MockReply::Fail(message)) => Err(ExternalServiceError::new(message)),
            None => Ok(Vec::new()),
        }
    }
}
