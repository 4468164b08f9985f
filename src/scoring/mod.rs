//! Indicator scoring engine.
//!
//! Pure evaluation of registered indicators against a case record. No
//! scenario logic lives here: blocking is a post-filter applied by the
//! criterion aggregator, so scoring rules stay scenario-agnostic.

mod engine;

pub use engine::{score_all, score_indicator, IndicatorScore, ScoreFlag};
