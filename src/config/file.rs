//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".mar-tools.yaml",
    ".mar-tools.yml",
    "mar-tools.yaml",
    "mar-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/mar-tools/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let tool_config_dir = config_dir.join("mar-tools");
        if let Some(path) = find_config_in_dir(&tool_config_dir) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load configuration, falling back to defaults when no file is found.
///
/// Returns the config and the path it was loaded from, if any.
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    match discover_config_file(explicit_path) {
        Some(path) => match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {e}", path.display());
                (AppConfig::default(), None)
            }
        },
        None => (AppConfig::default(), None),
    }
}

/// Generate an example configuration file with comments.
#[must_use]
pub fn generate_example_config() -> String {
    r#"# mar-tools configuration
# Place as .mar-tools.yaml in your project root or ~/.config/mar-tools/.

weights:
  # Default 5x5 pairwise-comparison matrix over C1..C5 (reciprocal,
  # unit diagonal). Omit for uniform weights.
  # matrix:
  #   - [1.0, 3.0, 5.0, 2.0, 4.0]
  #   - [0.333, 1.0, 2.0, 0.5, 2.0]
  #   - [0.2, 0.5, 1.0, 0.333, 1.0]
  #   - [0.5, 2.0, 3.0, 1.0, 3.0]
  #   - [0.25, 0.5, 1.0, 0.333, 1.0]
  cr_threshold: 0.10

assessment:
  # Fail `assess` when the classified completeness tier is below this (0..3).
  # min_tier: 2
  # Fail `assess` when the winner's suitability index is below this (0..4).
  # min_score: 2.5
  custom_influence: false

output:
  format: auto
  # file: report.json
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_parses_and_validates() {
        use crate::config::Validatable;
        let config: AppConfig = serde_yaml::from_str(&generate_example_config()).unwrap();
        assert!(config.is_valid());
        assert_eq!(config.weights.cr_threshold, 0.10);
        assert!(config.weights.matrix.is_none());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = load_config_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }
}
