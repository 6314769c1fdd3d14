//! Fan-out of one extraction per URL, fan-in in input order.

use futures::future::join_all;
use tracing::{info, warn};

use crate::traits::EmailExtractor;
use crate::types::ExtractionOutcome;

/// Run one extraction per URL and wait for all of them to settle.
///
/// Every call is started before any is awaited; they interleave on the
/// current task with no concurrency cap. A failed call becomes a
/// [`ExtractionOutcome::Failure`] in its own slot and never affects its
/// siblings. The result has the same length and order as `urls`.
pub async fn dispatch_all<E>(extractor: &E, urls: &[String]) -> Vec<(String, ExtractionOutcome)>
where
    E: EmailExtractor + ?Sized,
{
    if urls.is_empty() {
        return Vec::new();
    }

    info!(count = urls.len(), "dispatching extraction batch");

    let calls = urls.iter().map(|url| async move {
        let outcome = match extractor.extract(url).await {
            Ok(emails) => ExtractionOutcome::success(emails),
            Err(e) => {
                warn!(url = %url, error = %e, "extraction failed");
                ExtractionOutcome::failure(e.outcome_message())
            }
        };
        (url.clone(), outcome)
    });

    let settled = join_all(calls).await;

    let failed = settled.iter().filter(|(_, o)| !o.is_success()).count();
    info!(
        count = settled.len(),
        succeeded = settled.len() - failed,
        failed,
        "extraction batch settled"
    );

    settled
}
