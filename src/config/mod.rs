//! Configuration module for mar-tools.
//!
//! A unified configuration system with type-safe structures, validation,
//! YAML file loading and discovery, and CLI argument merging.
//!
//! # Configuration file
//!
//! Place a `.mar-tools.yaml` in your project root or `~/.config/mar-tools/`:
//!
//! ```yaml
//! weights:
//!   cr_threshold: 0.10
//! assessment:
//!   min_tier: 2
//! output:
//!   format: json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_CR_THRESHOLD, DEFAULT_MIN_SCORE_CEILING};
pub use types::{AppConfig, AssessmentConfig, OutputConfig, WeightsConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{discover_config_file, generate_example_config, load_config_file, load_or_default, ConfigFileError};

/// Generate a JSON Schema for the `AppConfig` configuration format.
pub fn config_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_generation_is_nonempty() {
        let schema = config_json_schema();
        assert!(schema.contains("AppConfig"));
    }
}
