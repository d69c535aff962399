use scraper::Html;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::selector;
use crate::error::Result;

pub const HEADING_LEVELS: std::ops::RangeInclusive<u8> = 1..=6;

/// Number of `h1`..`h6` elements in a document. Every level is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounts([usize; 6]);

impl HeadingCounts {
    /// Count for `level`, or `None` outside 1..=6.
    pub fn get(&self, level: u8) -> Option<usize> {
        Self::index(level).map(|i| self.0[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        HEADING_LEVELS.zip(self.0.iter().copied())
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    fn index(level: u8) -> Option<usize> {
        HEADING_LEVELS
            .contains(&level)
            .then(|| usize::from(level - 1))
    }
}

impl From<[usize; 6]> for HeadingCounts {
    fn from(counts: [usize; 6]) -> Self {
        Self(counts)
    }
}

impl Serialize for HeadingCounts {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (level, count) in self.iter() {
            map.serialize_entry(&format!("h{}", level), &count)?;
        }
        map.end()
    }
}

/// Counts every heading element per level, regardless of nesting or
/// visibility.
pub fn count_headings(document: &Html) -> Result<HeadingCounts> {
    let mut counts = [0usize; 6];
    for (slot, level) in counts.iter_mut().zip(HEADING_LEVELS) {
        let selector = selector(&format!("h{}", level))?;
        *slot = document.select(&selector).count();
    }
    Ok(HeadingCounts(counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_nested_and_out_of_order_headings() {
        let html = Html::parse_document(
            r#"<body>
                <h3>one</h3>
                <section><div><h3>two</h3></div></section>
                <h1>top</h1>
                <article><h3>three</h3><h6></h6></article>
            </body>"#,
        );
        let counts = count_headings(&html).unwrap();

        assert_eq!(counts.get(1), Some(1));
        assert_eq!(counts.get(2), Some(0));
        assert_eq!(counts.get(3), Some(3));
        assert_eq!(counts.get(6), Some(1));
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_hidden_headings_are_counted() {
        let html = Html::parse_document(
            r#"<body><h2 style="display:none">x</h2><h2 hidden>y</h2></body>"#,
        );
        assert_eq!(count_headings(&html).unwrap().get(2), Some(2));
    }

    #[test]
    fn test_levels_outside_range_have_no_entry() {
        let counts = HeadingCounts::default();
        assert_eq!(counts.get(0), None);
        assert_eq!(counts.get(7), None);
        assert_eq!(counts.iter().count(), 6);
    }

    #[test]
    fn test_serializes_as_tag_keyed_map() {
        let counts = HeadingCounts::from([1, 1, 0, 0, 0, 2]);
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"h1": 1, "h2": 1, "h3": 0, "h4": 0, "h5": 0, "h6": 2})
        );
    }
}
