//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! business logic for one subcommand and returns the desired exit code.

mod assess;
mod scenario;
mod schema;
mod weights;

pub use assess::{run_assess, AssessConfig};
pub use scenario::run_scenario;
pub use schema::{run_schema, SchemaTarget};
pub use weights::run_weights;
