//! Batch pipeline: parse → dispatch → reduce.
//!
//! - [`source`] - CSV text to candidate URLs
//! - [`dispatch`] - concurrent per-URL extraction, settled in input order
//! - [`reduce`] - settled pairs to a keyed [`ResultMap`](crate::ResultMap)
//! - [`response`] - validation of the AI service's structured reply
//! - [`batch`] - one submission and its completion state

pub mod batch;
pub mod dispatch;
pub mod reduce;
pub mod response;
pub mod source;

pub use batch::{BatchRun, RunState};
pub use dispatch::dispatch_all;
pub use reduce::reduce;
pub use response::{looks_like_email, parse_emails_response, EmailsResponse, ResponseError};
pub use source::parse_urls;
