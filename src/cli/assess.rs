//! Assess command handler.
//!
//! Implements the `assess` subcommand: the full parse → score → classify →
//! aggregate → rank pipeline over a single case file.

use crate::config::AppConfig;
use crate::parsers::{parse_case, parse_matrix};
use crate::pipeline::{
    assess, auto_detect_format, exit_codes, write_output, AssessOptions, OutputTarget,
};
use crate::reports::{render, ReportFormat, ReportMetadata};
use crate::suitability::{PairwiseMatrix, ScoreOverrides};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Assess command configuration
pub struct AssessConfig {
    pub case_path: PathBuf,
    pub matrix_path: Option<PathBuf>,
    pub overrides_path: Option<PathBuf>,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub min_score: Option<f64>,
    pub min_tier: Option<u8>,
    pub custom_influence: bool,
    pub quiet: bool,
}

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(config: AssessConfig, app: &AppConfig) -> Result<i32> {
    let case = parse_case(&config.case_path)
        .with_context(|| format!("reading case file {}", config.case_path.display()))?;

    let matrix = resolve_matrix(&config, app)?;
    let overrides = resolve_overrides(&config, app)?;

    tracing::info!("Running suitability assessment");
    let assessment = assess(&case, &AssessOptions { matrix, overrides });

    let metadata = ReportMetadata::new(Some(config.case_path.display().to_string()));
    let target = OutputTarget::from_option(
        config.output_file.clone().or_else(|| app.output.file.clone()),
    );
    let format = auto_detect_format(
        match config.output {
            ReportFormat::Auto => app.output.format,
            other => other,
        },
        &target,
    );
    let output_text = render(format, &assessment, &metadata)?;
    write_output(&output_text, &target, config.quiet)?;

    // Threshold checks: CLI flags override config.
    let min_tier = config.min_tier.or(app.assessment.min_tier);
    if let Some(tier) = min_tier {
        if assessment.scenario.tier.id() < tier {
            tracing::error!(
                "Completeness tier {} is below the required tier {}",
                assessment.scenario.tier.id(),
                tier
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    let min_score = config.min_score.or(app.assessment.min_score);
    if let Some(threshold) = min_score {
        let winner_total = assessment.podium.winner().total;
        if winner_total < threshold {
            tracing::error!(
                "Suitability index {winner_total:.3} is below minimum threshold {threshold:.3}"
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn resolve_matrix(config: &AssessConfig, app: &AppConfig) -> Result<PairwiseMatrix> {
    if let Some(path) = &config.matrix_path {
        return parse_matrix(path)
            .with_context(|| format!("reading pairwise matrix {}", path.display()));
    }
    Ok(app.weights.matrix.unwrap_or_default())
}

fn resolve_overrides(config: &AssessConfig, app: &AppConfig) -> Result<ScoreOverrides> {
    let mut overrides = match &config.overrides_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading overrides file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing overrides file {}", path.display()))?
        }
        None => ScoreOverrides::default(),
    };
    if config.custom_influence || app.assessment.custom_influence {
        overrides.custom_influence_enabled = true;
    }
    Ok(overrides)
}
