//! Default configuration values.

/// Conventional AHP consistency-ratio acceptance bar.
pub const DEFAULT_CR_THRESHOLD: f64 = 0.10;

/// Suitability totals live in [0, 4]; a min-score above this is a mistake.
pub const DEFAULT_MIN_SCORE_CEILING: f64 = 4.0;
