use crate::error::ExtractError;
use serde::Serialize;

/// Sentinel used for any field that could not be found
pub const NOT_FOUND: &str = "N/A";

/// The three fields pulled out of a page's HTML
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Text of the `<title>` element
    pub title: String,

    /// Open Graph / named title metadata, or the title
    pub meta_title: String,

    /// Open Graph / named description metadata
    pub meta_description: String,
}

/// Result for one input URL, built once and never changed afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionRecord {
    url: String,
    title: String,
    meta_title: String,
    meta_description: String,
    #[serde(skip)]
    failed: bool,
}

impl ExtractionRecord {
    /// Create a record from successfully extracted metadata
    pub fn new(url: &str, meta: PageMeta) -> Self {
        Self {
            url: url.trim().to_string(),
            title: meta.title,
            meta_title: meta.meta_title,
            meta_description: meta.meta_description,
            failed: false,
        }
    }

    /// Create a placeholder record carrying the error text in the title
    pub fn failed(url: &str, err: &ExtractError) -> Self {
        Self {
            url: url.trim().to_string(),
            title: err.to_string(),
            meta_title: NOT_FOUND.to_string(),
            meta_description: NOT_FOUND.to_string(),
            failed: true,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meta_title(&self) -> &str {
        &self.meta_title
    }

    pub fn meta_description(&self) -> &str {
        &self.meta_description
    }

    /// Whether this record stands in for a failed fetch or parse
    pub fn is_failure(&self) -> bool {
        self.failed
    }
}
