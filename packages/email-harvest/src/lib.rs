//! Batch email discovery for websites.
//!
//! Takes one URL or a CSV of URLs, asks an AI extraction service for the
//! email addresses each site likely publishes, and collects every per-URL
//! outcome (success with a list, or failure with a message) into a keyed
//! [`ResultMap`]. One failing URL never aborts the rest of its batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use email_harvest::{HarvestConfig, Harvester, OpenAIExtractor};
//!
//! let config = HarvestConfig::from_env()?;
//! let harvester = Harvester::new(OpenAIExtractor::from_config(&config));
//!
//! let results = harvester.harvest_csv_file("sites.csv").await?;
//! for (url, outcome) in results.iter() {
//!     println!("{url}: {outcome:?}");
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - the [`EmailExtractor`] seam
//! - [`ai`] - OpenAI-compatible extractor
//! - [`pipeline`] - CSV parsing, dispatch, reduction, response validation
//! - [`harvester`] - single-URL and CSV entry points
//! - [`contact`] - outreach `mailto:` links
//! - [`testing`] - scripted extractor for tests

pub mod ai;
pub mod config;
pub mod contact;
pub mod error;
pub mod harvester;
pub mod pipeline;
pub mod render;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

pub use ai::OpenAIExtractor;
pub use config::HarvestConfig;
pub use error::{ConfigurationError, ExternalServiceError, HarvestError, InputError, Result};
pub use harvester::Harvester;
pub use pipeline::{dispatch_all, parse_emails_response, parse_urls, reduce, BatchRun, RunState};
pub use traits::EmailExtractor;
pub use types::{ExtractionOutcome, ResultMap};

pub use testing::MockExtractor;
