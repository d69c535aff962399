//! One-page SEO analysis: fetch, then extract.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{AnalysisFailure, Result};
use crate::extractor::{self, HeadingCounts};
use crate::io::PageFetcher;

/// Signals extracted from a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub title: String,
    pub description: String,
    #[serde(rename = "headings")]
    pub heading_counts: HeadingCounts,
    pub word_count: usize,
}

/// What the view renders: a full record or only an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Success(AnalysisResult),
    Failure { error: String },
}

impl AnalysisReport {
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error } => Some(error),
        }
    }
}

impl From<AnalysisFailure> for AnalysisReport {
    fn from(failure: AnalysisFailure) -> Self {
        Self::Failure {
            error: failure.to_string(),
        }
    }
}

impl From<Result<AnalysisResult>> for AnalysisReport {
    fn from(outcome: Result<AnalysisResult>) -> Self {
        match outcome {
            Ok(result) => Self::Success(result),
            Err(failure) => failure.into(),
        }
    }
}

/// Fetches `url` with a default client and analyzes the body.
pub async fn analyze_url(url: &str) -> Result<AnalysisResult> {
    let fetcher = PageFetcher::new()?;
    analyze_with(&fetcher, url).await
}

pub async fn analyze_with(fetcher: &PageFetcher, url: &str) -> Result<AnalysisResult> {
    let outcome = fetch_and_extract(fetcher, url).await;
    match &outcome {
        Ok(result) => info!(
            "Analyzed {}: {} words, {} headings",
            url,
            result.word_count,
            result.heading_counts.total()
        ),
        Err(e) => warn!("Analysis of {:?} failed: {}", url, e),
    }
    outcome
}

async fn fetch_and_extract(fetcher: &PageFetcher, url: &str) -> Result<AnalysisResult> {
    let page = fetcher.fetch(url).await?;
    extractor::extract(&page.body)
}

/// Runs an analysis and folds it into a renderable record.
pub async fn analyze_report(url: &str) -> AnalysisReport {
    analyze_url(url).await.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            title: "Hi".into(),
            description: "Hello world".into(),
            heading_counts: HeadingCounts::from([1, 1, 0, 0, 0, 0]),
            word_count: 3,
        }
    }

    #[test]
    fn test_success_report_serializes_all_fields() {
        let report = AnalysisReport::from(Ok::<_, AnalysisFailure>(sample_result()));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Hi",
                "description": "Hello world",
                "headings": {"h1": 1, "h2": 1, "h3": 0, "h4": 0, "h5": 0, "h6": 0},
                "word_count": 3
            })
        );
    }

    #[test]
    fn test_failure_report_has_only_error() {
        let report = AnalysisReport::from(AnalysisFailure::new("connection refused"));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json, serde_json::json!({"error": "connection refused"}));
        assert_eq!(report.error(), Some("connection refused"));
    }
}
