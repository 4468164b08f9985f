//! **Decision support for Managed Aquifer Recharge (MAR) technique selection.**
//!
//! `mar-tools` scores a hydrogeological "case record" — field data across ten
//! modules (geology, hydraulics, hydrology, hydrogeochemistry, aquifer
//! characterization, water source, volumes, infrastructure, community,
//! relief) — against a registry of 35 suitability indicators, aggregates the
//! scores under five weighted criteria, and ranks three candidate MAR
//! technique groups:
//!
//! - **G1** — intervention on surface water courses
//! - **G2** — well and borehole recharge
//! - **G3** — surface infiltration
//!
//! Criterion weights come from an AHP pairwise-comparison matrix (with
//! consistency-ratio diagnostics); group totals come from a weighted linear
//! combination (WLC) of per-criterion scores. Partial information is the
//! normal case: missing fields score zero and are reported, never raised as
//! errors, and a completeness tier (scenario 0–3) gates which indicators may
//! influence the ranking at all.
//!
//! ## Core concepts & modules
//!
//! - **[`model`]**: the [`CaseRecord`] intermediate representation — ten
//!   fixed modules of field → value pairs, with legacy-alias lookup and
//!   placeholder-aware filled checks.
//! - **[`registry`]**: the static catalog of indicators (V1…V35), criteria
//!   (C1…C5) and recommendable techniques. Built once, never mutated.
//! - **[`scoring`]**: pure per-indicator evaluation producing 0–4 ordinal
//!   scores per technique group, evidence excerpts and missing-field lists.
//! - **[`scenario`]**: the completeness-tier classifier and its blocking
//!   predicate.
//! - **[`suitability`]**: criterion aggregation, AHP weight derivation and
//!   WLC ranking.
//! - **[`pipeline`]**: one-call orchestration ([`assess`](pipeline::assess))
//!   plus output helpers and exit codes.
//! - **[`parsers`]**, **[`reports`]**, **[`config`]**, **[`cli`]**: the thin
//!   surfaces around the engine.
//!
//! ## Getting started
//!
//! ```no_run
//! use std::path::Path;
//! use mar_tools::parsers::parse_case;
//! use mar_tools::pipeline::{assess, AssessOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let case = parse_case(Path::new("caso.json"))?;
//!     let assessment = assess(&case, &AssessOptions::default());
//!
//!     println!(
//!         "{} — grupo recomendado: {}",
//!         assessment.scenario.tier,
//!         assessment.podium.winner().group.label()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Custom criteria weights
//!
//! ```
//! use mar_tools::suitability::{derive_weights, PairwiseMatrix};
//!
//! // C1 strongly preferred over the rest.
//! let matrix = PairwiseMatrix([
//!     [1.0, 5.0, 5.0, 5.0, 5.0],
//!     [0.2, 1.0, 1.0, 1.0, 1.0],
//!     [0.2, 1.0, 1.0, 1.0, 1.0],
//!     [0.2, 1.0, 1.0, 1.0, 1.0],
//!     [0.2, 1.0, 1.0, 1.0, 1.0],
//! ]);
//! let outcome = derive_weights(&matrix);
//! assert!(outcome.weights[0] > 0.4);
//! assert!(outcome.is_consistent());
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize↔f64 casts in score math are all bounded (0..=4, 35 indicators)
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // # Errors / # Panics sections are aspirational for the small API
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod registry;
pub mod reports;
pub mod scenario;
pub mod scoring;
pub mod suitability;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AssessmentConfig, OutputConfig, Validatable, WeightsConfig};
pub use error::{ErrorContext, MarToolsError, OptionContext, Result};
pub use model::{CaseRecord, FieldRef, FieldValue, Group, GroupScores, ModuleId};
pub use parsers::{parse_case, parse_case_str, parse_matrix, parse_matrix_str};
pub use pipeline::{assess, AssessOptions, Assessment};
pub use registry::{CriterionId, IndicatorId};
pub use reports::{AssessmentReporter, JsonReporter, MarkdownReporter, ReportFormat, SummaryReporter};
pub use scenario::{classify, ScenarioState, ScenarioTier};
pub use scoring::{score_all, score_indicator, IndicatorScore};
pub use suitability::{
    compute_wlc, derive_weights, rank, AhpOutcome, PairwiseMatrix, Podium, ScoreOverrides,
    WlcTable,
};
