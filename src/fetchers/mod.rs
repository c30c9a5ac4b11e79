pub mod http;

use crate::error::ExtractError;
use std::future::Future;

pub use http::HttpFetcher;

/// Base trait for anything that can turn a URL into page source
pub trait Fetcher {
    /// Fetch the body of a single URL as text
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ExtractError>> + Send;
}
