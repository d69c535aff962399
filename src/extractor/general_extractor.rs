use scraper::Html;

use super::{first_by_attr, first_by_tag, NO_DESCRIPTION, NO_TITLE};
use crate::error::Result;

/// Text of the first `<title>`, as authored.
pub fn extract_title(document: &Html) -> Result<String> {
    let title = first_by_tag(document, "title")?
        .map(|el| el.text().collect::<String>())
        .unwrap_or_else(|| NO_TITLE.to_string());
    Ok(title)
}

/// `content` of the first `<meta name="description">`.
///
/// The `name` comparison is exact. A matching tag without `content`
/// yields an empty string rather than the sentinel.
pub fn extract_meta_description(document: &Html) -> Result<String> {
    let meta = first_by_attr(document, "meta", |el| {
        el.value().attr("name") == Some("description")
    })?;

    Ok(match meta {
        Some(el) => el.value().attr("content").unwrap_or_default().to_string(),
        None => NO_DESCRIPTION.to_string(),
    })
}

/// Whitespace-delimited tokens over every text node of the document,
/// concatenated without separators. Script and style text counts too.
pub fn count_words(document: &Html) -> usize {
    document
        .root_element()
        .text()
        .collect::<String>()
        .split_whitespace()
        .count()
}
