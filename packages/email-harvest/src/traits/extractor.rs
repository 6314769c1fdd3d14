//! Seam between the batch pipeline and whatever finds the addresses.

use async_trait::async_trait;

use crate::error::ExternalServiceError;

/// Finds email addresses likely published on a website.
///
/// Implementations wrap a specific provider and own prompting and response
/// validation. The pipeline only relies on the contract below.
#[async_trait]
pub trait EmailExtractor: Send + Sync {
    /// Addresses for `url`.
    ///
    /// An empty `url` yields `Ok(vec![])` without contacting the provider.
    /// Every returned string contains `@`.
    async fn extract(&self, url: &str) -> Result<Vec<String>, ExternalServiceError>;
}

#[async_trait]
impl<T: EmailExtractor + ?Sized> EmailExtractor for std::sync::Arc<T> {
    async fn extract(&self, url: &str) -> Result<Vec<String>, ExternalServiceError> {
        (**self).extract(url).await
    }
}
