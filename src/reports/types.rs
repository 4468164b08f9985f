//! Report type definitions.

use chrono::Utc;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary if interactive, JSON otherwise
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    Markdown,
    /// Brief summary output
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Metadata embedded in every report
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ReportMetadata {
    pub tool: String,
    pub version: String,
    pub generated_at: String,
    pub case_path: Option<String>,
}

impl ReportMetadata {
    pub fn new(case_path: Option<String>) -> Self {
        Self {
            tool: "mar-tools".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            case_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_value_enum() {
        assert_eq!(ReportFormat::Json.to_string(), "json");
        assert_eq!(ReportFormat::default(), ReportFormat::Auto);
    }
}
