//! Testing infrastructure for sightline integration tests.
//!
//! Provides fluent builders for session records and tag metadata so tests
//! describe scenarios instead of struct literals.

pub mod fixtures;

pub use fixtures::{SessionBuilder, tag_metadata, ts};
