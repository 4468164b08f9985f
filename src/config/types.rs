//! Configuration type definitions.

use super::defaults::DEFAULT_CR_THRESHOLD;
use crate::reports::ReportFormat;
use crate::suitability::PairwiseMatrix;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    pub weights: WeightsConfig,
    pub assessment: AssessmentConfig,
    pub output: OutputConfig,
}

/// AHP weighting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeightsConfig {
    /// Default pairwise judgments, used when no `--matrix` is given.
    /// Absent means the indifferent matrix (uniform weights).
    pub matrix: Option<PairwiseMatrix>,
    /// CR bar used by `weights --strict`.
    pub cr_threshold: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            matrix: None,
            cr_threshold: DEFAULT_CR_THRESHOLD,
        }
    }
}

/// Assessment behavior configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Fail the assess command when the classified tier is below this.
    pub min_tier: Option<u8>,
    /// Fail the assess command when the winner's total is below this.
    pub min_score: Option<f64>,
    /// Let per-group custom overrides participate in aggregation.
    pub custom_influence: bool,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ReportFormat,
    /// Output file path (stdout if not specified).
    pub file: Option<PathBuf>,
}
