//! Schema command handler.
//!
//! Emits machine-readable schemas for the case-file and config formats, and
//! a commented example configuration.

use crate::config::{config_json_schema, generate_example_config};
use crate::model::CaseRecord;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

/// What to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    /// JSON Schema of the case record format
    Case,
    /// JSON Schema of the configuration file format
    Config,
    /// Commented example configuration (YAML)
    Example,
}

/// Run the schema command, returning the desired exit code.
pub fn run_schema(target: SchemaTarget, output_file: Option<PathBuf>, quiet: bool) -> Result<i32> {
    let text = match target {
        SchemaTarget::Case => {
            let schema = schemars::schema_for!(CaseRecord);
            serde_json::to_string_pretty(&schema)?
        }
        SchemaTarget::Config => config_json_schema(),
        SchemaTarget::Example => generate_example_config(),
    };

    let out = OutputTarget::from_option(output_file);
    write_output(&text, &out, quiet)?;
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_schema_emitted() {
        let out = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let code = run_schema(SchemaTarget::Case, Some(out.path().to_path_buf()), true).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        let written = std::fs::read_to_string(out.path()).unwrap();
        assert!(written.contains("CaseRecord"));
    }
}
