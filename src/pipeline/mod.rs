//! Pipeline orchestration for case assessments.
//!
//! Shared logic for the parse → score → classify → aggregate → rank
//! workflow, plus output helpers, keeping CLI command handlers thin.

mod assess;
mod output;

pub use assess::{assess, AssessOptions, Assessment};
pub use output::{auto_detect_format, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// A threshold was not met (score below --min-score, tier below --tier,
    /// or inconsistent judgments under --strict)
    pub const BELOW_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
