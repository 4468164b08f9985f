//! Weights command handler.
//!
//! Derives AHP priority weights from a pairwise-comparison matrix and
//! reports the consistency diagnostics.

use crate::config::AppConfig;
use crate::parsers::parse_matrix;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::registry::CriterionId;
use crate::reports::ReportFormat;
use crate::suitability::derive_weights;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Run the weights command, returning the desired exit code.
///
/// With `--strict`, judgments whose CR exceeds the configured threshold
/// yield a non-zero exit; otherwise a high CR is advisory output only.
pub fn run_weights(
    matrix_path: Option<PathBuf>,
    strict: bool,
    output: ReportFormat,
    output_file: Option<PathBuf>,
    quiet: bool,
    app: &AppConfig,
) -> Result<i32> {
    let matrix = match &matrix_path {
        Some(path) => parse_matrix(path)
            .with_context(|| format!("reading pairwise matrix {}", path.display()))?,
        None => app.weights.matrix.unwrap_or_default(),
    };

    let outcome = derive_weights(&matrix);

    let text = match output {
        ReportFormat::Json => serde_json::to_string_pretty(&outcome)?,
        _ => {
            let mut out = String::new();
            for (criterion, weight) in CriterionId::ALL.iter().zip(outcome.weights.iter()) {
                writeln!(out, "{criterion}  {} {weight:.4}", criterion.label()).ok();
            }
            writeln!(out).ok();
            writeln!(out, "λmax = {:.4}", outcome.lambda_max).ok();
            writeln!(out, "CI   = {:.4}", outcome.ci).ok();
            writeln!(out, "CR   = {:.4}", outcome.cr).ok();
            if !outcome.is_consistent() {
                writeln!(out).ok();
                writeln!(out, "Atención: CR > 0.10 — revise los juicios de comparación").ok();
            }
            out
        }
    };

    let target = OutputTarget::from_option(output_file);
    write_output(&text, &target, quiet)?;

    if strict && outcome.cr > app.weights.cr_threshold {
        tracing::error!(
            cr = outcome.cr,
            threshold = app.weights.cr_threshold,
            "judgment matrix is not acceptably consistent"
        );
        return Ok(exit_codes::BELOW_THRESHOLD);
    }

    Ok(exit_codes::SUCCESS)
}
