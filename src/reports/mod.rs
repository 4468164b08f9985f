//! Report generation for case assessments.
//!
//! Three output formats over the same [`Assessment`]:
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//! - Summary: compact shell-friendly output

mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportFormat, ReportMetadata};

use crate::pipeline::Assessment;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Output format not supported: {0}")]
    UnsupportedFormat(String),
}

/// Common interface for assessment report generators
pub trait AssessmentReporter {
    /// Render an assessment to the target format.
    fn generate(
        &self,
        assessment: &Assessment,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError>;
}

/// Render an assessment in the requested (already-resolved) format.
pub fn render(
    format: ReportFormat,
    assessment: &Assessment,
    metadata: &ReportMetadata,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => JsonReporter::new().generate(assessment, metadata),
        ReportFormat::Markdown => MarkdownReporter::new().generate(assessment, metadata),
        ReportFormat::Summary => SummaryReporter::new().generate(assessment, metadata),
        ReportFormat::Auto => Err(ReportError::UnsupportedFormat(
            "auto must be resolved before rendering".to_string(),
        )),
    }
}
