//! Criterion aggregation, AHP weighting and WLC ranking.
//!
//! The three stages that turn per-indicator scores into a ranked podium:
//! group indicator scores under the five criteria, weight the criteria from
//! the user's pairwise judgments, and combine both into per-group totals.

mod ahp;
mod criterion;
mod overrides;
mod wlc;

pub use ahp::{derive_weights, AhpOutcome, PairwiseMatrix, CR_ACCEPTABLE, RANDOM_INDEX};
pub use criterion::{aggregate_all, aggregate_criterion, CriterionAggregate, GroupAggregate};
pub use overrides::{resolve_score, ScoreOverrides, OVERRIDE_LOCKED};
pub use wlc::{compute_wlc, rank, GroupValues, Podium, PodiumEntry, WlcRow, WlcTable, TOTAL_ROW_ID};
