//! Configuration validation.

use super::defaults::DEFAULT_MIN_SCORE_CEILING;
use super::types::{AppConfig, AssessmentConfig, OutputConfig, WeightsConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.weights.validate());
        errors.extend(self.assessment.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for WeightsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.cr_threshold) || self.cr_threshold == 0.0 {
            errors.push(ConfigError {
                field: "weights.cr_threshold".to_string(),
                message: format!(
                    "must be in (0.0, 1.0], got {}",
                    self.cr_threshold
                ),
            });
        }

        if let Some(matrix) = &self.matrix {
            if let Err(message) = matrix.validate() {
                errors.push(ConfigError {
                    field: "weights.matrix".to_string(),
                    message,
                });
            }
        }

        errors
    }
}

impl Validatable for AssessmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(tier) = self.min_tier {
            if tier > 3 {
                errors.push(ConfigError {
                    field: "assessment.min_tier".to_string(),
                    message: format!("tiers are 0..=3, got {tier}"),
                });
            }
        }

        if let Some(score) = self.min_score {
            if !(0.0..=DEFAULT_MIN_SCORE_CEILING).contains(&score) {
                errors.push(ConfigError {
                    field: "assessment.min_score".to_string(),
                    message: format!(
                        "suitability totals are in [0, {DEFAULT_MIN_SCORE_CEILING}], got {score}"
                    ),
                });
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(file_path) = &self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!(
                            "parent directory does not exist: {}",
                            parent.display()
                        ),
                    });
                }
            }
        }

        errors
    }
}
