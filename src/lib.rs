// src/lib.rs

pub mod analysis;
pub mod config;
pub mod error;
pub mod extractor;
pub mod io;
pub mod lifecycle;
pub mod views;

pub use analysis::{analyze_url, AnalysisReport, AnalysisResult};
pub use error::AnalysisFailure;
