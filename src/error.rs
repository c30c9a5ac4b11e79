use thiserror::Error;

/// Failure while producing the record for a single URL.
///
/// The display text is what ends up in the record's title, so each variant
/// carries a prefix identifying where the failure happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Network or HTTP failure (DNS, refused connection, TLS, timeout, 4xx/5xx)
    #[error("Error: {0}")]
    Request(String),

    /// Failure while walking the parsed document
    #[error("Error parsing HTML: {0}")]
    Parse(String),
}

impl ExtractError {
    /// Build a request error from a reqwest error, calling out timeouts
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            ExtractError::Request(format!(
                "request timed out after {}s: {}",
                timeout_secs, err
            ))
        } else {
            ExtractError::Request(err.to_string())
        }
    }
}

/// Failures that stop a batch before any URL is processed
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Please enter at least one URL.")]
    EmptyInput,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
