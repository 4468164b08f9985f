//! Scenario command handler.
//!
//! Classifies a case's completeness tier and lists what blocks the next one.

use crate::parsers::parse_case;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::reports::ReportFormat;
use crate::scenario::classify;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Run the scenario command, returning the desired exit code.
pub fn run_scenario(
    case_path: PathBuf,
    output: ReportFormat,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    let case = parse_case(&case_path)
        .with_context(|| format!("reading case file {}", case_path.display()))?;

    let state = classify(&case);
    tracing::info!(tier = state.tier.id(), "scenario classified");

    let text = match output {
        ReportFormat::Json => serde_json::to_string_pretty(&state)?,
        _ => {
            let mut out = String::new();
            writeln!(out, "{}", state.tier).ok();
            writeln!(
                out,
                "Completitud: {}/{} variables con información completa",
                state.completed, state.total
            )
            .ok();
            if !state.missing.is_empty() {
                writeln!(out).ok();
                writeln!(out, "Para alcanzar el siguiente escenario complete:").ok();
                for path in &state.missing {
                    writeln!(out, "  - {path}").ok();
                }
            }
            out
        }
    };

    let target = OutputTarget::from_option(output_file);
    write_output(&text, &target, quiet)?;
    Ok(exit_codes::SUCCESS)
}
