//! Error type for a single page analysis.
//!
//! Every failure on the fetch/extract path (network, DNS, malformed URL,
//! body decoding, selector parsing) collapses into [`AnalysisFailure`],
//! which carries the underlying cause as text.

use std::error::Error as StdError;
use thiserror::Error;

/// The one failure kind surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AnalysisFailure {
    message: String,
}

impl AnalysisFailure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }

    /// Builds a failure from an error and its whole source chain,
    /// e.g. `error sending request: ...: Connection refused`.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Self::new(message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for AnalysisFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::from_error(&err)
    }
}

/// Result type alias using AnalysisFailure.
pub type Result<T> = std::result::Result<T, AnalysisFailure>;
