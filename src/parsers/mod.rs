pub mod html;
pub mod text;


/// Which attribute of a `<meta>` element identifies it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaSource {
    /// Attribute to match on (`property`, `name`, ...)
    pub attribute: String,
    /// Exact value the attribute must have
    pub value: String,
}

impl MetaSource {
    /// Match `<meta>` elements by an arbitrary attribute
    pub fn new(attribute: &str, value: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }

    /// Match `<meta property="...">`, the Open Graph convention
    pub fn property(value: &str) -> Self {
        Self::new("property", value)
    }

    /// Match `<meta name="...">`
    pub fn name(value: &str) -> Self {
        Self::new("name", value)
    }

    /// CSS selector string for this source
    pub fn selector(&self) -> String {
        format!(
            "meta[{}=\"{}\"]",
            self.attribute,
            self.value.replace('\\', "\\\\").replace('"', "\\\"")
        )
    }
}

/// What a field becomes when none of its sources match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Reuse the already extracted document title
    Title,
    /// Use the "N/A" sentinel
    NotFound,
}

/// Ordered meta sources for one field, plus what to do when all of them miss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub sources: Vec<MetaSource>,
    pub fallback: Fallback,
}

impl FieldRule {
    pub fn new(sources: Vec<MetaSource>, fallback: Fallback) -> Self {
        Self { sources, fallback }
    }
}

/// Extraction rules for the meta title and meta description
///
/// The document title itself always comes from the `<title>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRules {
    pub meta_title: FieldRule,
    pub meta_description: FieldRule,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            meta_title: FieldRule::new(
                vec![MetaSource::property("og:title"), MetaSource::name("title")],
                Fallback::Title,
            ),
            meta_description: FieldRule::new(
                vec![
                    MetaSource::property("og:description"),
                    MetaSource::name("description"),
                ],
                Fallback::NotFound,
            ),
        }
    }
}
