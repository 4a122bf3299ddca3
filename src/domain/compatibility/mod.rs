//! Compatibility module - The authored blueprint-pair insight matrix.

mod entry;
mod matrix;

pub use entry::{CompatibilityAnalysis, CompatibilityEntry};
pub use matrix::{analyze, fallback, lookup, lookup_labels};
