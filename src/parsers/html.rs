use crate::error::ExtractError;
use crate::parsers::text::normalize_whitespace;
use crate::parsers::{ExtractionRules, Fallback, FieldRule, MetaSource};
use crate::results::{NOT_FOUND, PageMeta};
use scraper::{Html, Selector};

/// Extracts the title, meta title and meta description from raw HTML.
///
/// The parser recovers from malformed and truncated markup, so the only
/// failure is a rule that cannot be turned into a selector.
pub fn extract(html: &str, rules: &ExtractionRules) -> Result<PageMeta, ExtractError> {
    let doc = Html::parse_document(html);

    let title = extract_title(&doc)?;
    let meta_title = apply_rule(&doc, &rules.meta_title, &title)?;
    let meta_description = apply_rule(&doc, &rules.meta_description, &title)?;

    ::log::debug!(
        "Extracted title={:?} meta_title={:?} meta_description={:?}",
        title,
        meta_title,
        meta_description
    );

    Ok(PageMeta {
        title,
        meta_title,
        meta_description,
    })
}

/// Extracts with the standard Open Graph / named meta rules
pub fn extract_default(html: &str) -> Result<PageMeta, ExtractError> {
    extract(html, &ExtractionRules::default())
}

/// Text of the first `<title>` element, or "N/A" when there is none.
///
/// An element that is present but empty gives an empty string.
fn extract_title(doc: &Html) -> Result<String, ExtractError> {
    let selector = compile("title")?;
    Ok(doc
        .select(&selector)
        .next()
        .map(|e| normalize_whitespace(&e.text().collect::<String>()))
        .unwrap_or_else(|| NOT_FOUND.to_string()))
}

/// Tries each source of a rule in order and falls back when all of them miss
fn apply_rule(doc: &Html, rule: &FieldRule, title: &str) -> Result<String, ExtractError> {
    for source in &rule.sources {
        if let Some(content) = meta_content(doc, source)? {
            return Ok(content);
        }
    }

    Ok(match rule.fallback {
        Fallback::Title => title.to_string(),
        Fallback::NotFound => NOT_FOUND.to_string(),
    })
}

/// Normalized `content` of the first `<meta>` matching a source.
///
/// Only the first match in document order counts: if it has no `content`
/// attribute the source is treated as missing.
fn meta_content(doc: &Html, source: &MetaSource) -> Result<Option<String>, ExtractError> {
    let selector = compile(&source.selector())?;
    let first = doc.select(&selector).next();

    match first {
        Some(element) => match element.value().attr("content") {
            Some(content) => Ok(Some(normalize_whitespace(content))),
            None => {
                ::log::trace!("{} matched but has no content attribute", source.selector());
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector)
        .map_err(|e| ExtractError::Parse(format!("invalid selector {}: {}", selector, e)))
}
