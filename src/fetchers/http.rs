use crate::config::FetchConfig;
use crate::error::{BatchError, ExtractError};
use crate::fetchers::Fetcher;
use reqwest::Client;
use std::time::Duration;

/// Fetches pages with a single GET request each
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Build a fetcher from configuration
    pub fn new(config: &FetchConfig) -> Result<Self, BatchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        ::log::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ExtractError::from_reqwest(e, self.timeout_secs))?;

        ::log::debug!("{} responded with {}", url, response.status());

        response
            .text()
            .await
            .map_err(|e| ExtractError::from_reqwest(e, self.timeout_secs))
    }
}
