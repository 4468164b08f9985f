//! Intermediate representation for MAR assessment cases.
//!
//! This module defines the canonical data structures the scoring engine
//! reads: the case record (ten fixed modules of field → value pairs), the
//! technique groups, and per-group score containers. The record is owned and
//! mutated by the caller (UI, CLI, tests); the engine only reads it.

mod aliases;
mod case;
mod group;

pub use aliases::aliases_for;
pub use case::*;
pub use group::*;
