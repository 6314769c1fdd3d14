//! Entry points for a single URL or a CSV of URLs.
//!
//! Input validation happens here, before any extraction is attempted. Once a
//! batch starts, per-URL failures are kept inside the [`ResultMap`].

use std::path::Path;

use tracing::info;

use crate::error::InputError;
use crate::pipeline::{parse_urls, BatchRun};
use crate::traits::EmailExtractor;
use crate::types::ResultMap;

/// Runs batches against an injected extractor.
pub struct Harvester<E> {
    extractor: E,
}

impl<E: EmailExtractor> Harvester<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Harvest one URL. The URL is trimmed; blank input is rejected.
    pub async fn harvest_url(&self, url: &str) -> Result<ResultMap, InputError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(InputError::EmptyUrl);
        }

        info!(url = %url, "harvesting single URL");
        Ok(self.run(vec![url.to_string()]).await)
    }

    /// Harvest every URL in the first column of `text`.
    pub async fn harvest_csv_text(&self, text: &str) -> Result<ResultMap, InputError> {
        let urls = parse_urls(text);
        if urls.is_empty() {
            return Err(InputError::NoValidUrls);
        }

        Ok(self.run(urls).await)
    }

    /// Read a `.csv` file and harvest its URLs.
    pub async fn harvest_csv_file(&self, path: impl AsRef<Path>) -> Result<ResultMap, InputError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !name.ends_with(".csv") {
            return Err(InputError::NotCsv { name });
        }

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| InputError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;

        info!(file = %name, "harvesting CSV file");
        self.harvest_csv_text(&text).await
    }

    async fn run(&self, urls: Vec<String>) -> ResultMap {
        BatchRun::new(urls)
            .settle(&self.extractor)
            .await
            .into_results()
            .unwrap_or_default()
    }
}
