//! Stateless HTML-to-fields transform.
//!
//! The document is parsed once with [`Html::parse_document`] and every
//! field is queried from that tree.

pub mod general_extractor;
pub mod heading_extractor;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::analysis::AnalysisResult;
use crate::error::{AnalysisFailure, Result};

pub use heading_extractor::HeadingCounts;

pub const NO_TITLE: &str = "No title found";
pub const NO_DESCRIPTION: &str = "No description found";

/// Parses `html` and derives every field of an [`AnalysisResult`].
pub fn extract(html: &str) -> Result<AnalysisResult> {
    let document = Html::parse_document(html);
    extract_from_document(&document)
}

pub fn extract_from_document(document: &Html) -> Result<AnalysisResult> {
    let title = general_extractor::extract_title(document)?;
    let description = general_extractor::extract_meta_description(document)?;
    let heading_counts = heading_extractor::count_headings(document)?;
    let word_count = general_extractor::count_words(document);
    debug!(
        "Extracted title={:?} description={:?} headings={:?} words={}",
        title, description, heading_counts, word_count
    );

    Ok(AnalysisResult {
        title,
        description,
        heading_counts,
        word_count,
    })
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| AnalysisFailure::new(format!("invalid selector {:?}: {}", css, e)))
}

/// First element matching a tag name, in document order.
pub fn first_by_tag<'a>(document: &'a Html, tag: &str) -> Result<Option<ElementRef<'a>>> {
    let selector = selector(tag)?;
    Ok(document.select(&selector).next())
}

/// First element with the given tag whose attributes satisfy `predicate`.
pub fn first_by_attr<'a, F>(
    document: &'a Html,
    tag: &str,
    predicate: F,
) -> Result<Option<ElementRef<'a>>>
where
    F: Fn(&ElementRef<'a>) -> bool,
{
    let selector = selector(tag)?;
    Ok(document.select(&selector).find(|el| predicate(el)))
}
