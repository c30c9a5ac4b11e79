// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod input;
pub mod parsers;
pub mod report;
pub mod results;

// Re-export commonly used types for convenience
pub use config::FetchConfig;
pub use error::{BatchError, ExtractError};
pub use fetchers::{Fetcher, HttpFetcher};
pub use parsers::ExtractionRules;
pub use results::{ExtractionRecord, NOT_FOUND, PageMeta};

use std::time::Instant;

/// Progress of a batch run, reported once before and once after each URL
#[derive(Debug)]
pub enum Progress<'a> {
    /// A URL is about to be fetched (index is 1-based)
    Started {
        index: usize,
        total: usize,
        url: &'a str,
    },
    /// The record for a URL has been built
    Finished {
        index: usize,
        total: usize,
        record: &'a ExtractionRecord,
    },
}

/// Builder for a single extraction run over a list of URLs
pub struct Batch {
    urls: Vec<String>,
    config: FetchConfig,
    rules: ExtractionRules,
}

impl Batch {
    /// Create a new Batch for the given URLs, processed in order
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            config: FetchConfig::default(),
            rules: ExtractionRules::default(),
        }
    }

    /// Create a Batch from a multi-line block, one URL per non-blank line
    pub fn from_input(text: &str) -> Result<Self, BatchError> {
        let urls = input::parse_url_block(text);
        if urls.is_empty() {
            return Err(BatchError::EmptyInput);
        }
        Ok(Self::new(urls))
    }

    /// Replace the fetch configuration
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    /// Set the User-Agent sent with each request
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Set the meta title / description rules
    pub fn with_rules(mut self, rules: ExtractionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch and extract every URL over HTTP
    pub async fn run(
        &self,
        on_progress: impl FnMut(Progress<'_>),
    ) -> Result<Vec<ExtractionRecord>, BatchError> {
        let fetcher = HttpFetcher::new(&self.config)?;
        Ok(self.run_with(&fetcher, on_progress).await)
    }

    /// Fetch and extract every URL with the given fetcher.
    ///
    /// URLs are handled one at a time in input order. A failing URL yields a
    /// placeholder record and never stops the run.
    pub async fn run_with<F: Fetcher>(
        &self,
        fetcher: &F,
        mut on_progress: impl FnMut(Progress<'_>),
    ) -> Vec<ExtractionRecord> {
        let total = self.urls.len();
        let start_time = Instant::now();
        let mut records = Vec::with_capacity(total);

        ::log::info!("Starting extraction for {} URLs", total);

        for (i, url) in self.urls.iter().enumerate() {
            let index = i + 1;
            on_progress(Progress::Started {
                index,
                total,
                url: url.as_str(),
            });

            let fetched = fetcher.fetch(url).await;
            let record = extract_record(url, fetched, &self.rules);
            if record.is_failure() {
                ::log::warn!("{}: {}", record.url(), record.title());
            } else {
                ::log::info!("Processed {}/{}: {}", index, total, record.url());
            }

            on_progress(Progress::Finished {
                index,
                total,
                record: &record,
            });
            records.push(record);
        }

        let failures = records.iter().filter(|r| r.is_failure()).count();
        ::log::info!(
            "Extraction complete - {} URLs ({} failed) in {:.2} seconds",
            total,
            failures,
            start_time.elapsed().as_secs_f64()
        );

        records
    }
}

/// Turn the outcome of one fetch into a record
pub fn extract_record(
    url: &str,
    fetched: Result<String, ExtractError>,
    rules: &ExtractionRules,
) -> ExtractionRecord {
    match fetched.and_then(|body| parsers::html::extract(&body, rules)) {
        Ok(meta) => ExtractionRecord::new(url, meta),
        Err(e) => ExtractionRecord::failed(url, &e),
    }
}
