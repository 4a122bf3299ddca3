//! Compatibility handlers.

mod get_analysis;

pub use get_analysis::{GetAnalysisHandler, GetAnalysisQuery};
