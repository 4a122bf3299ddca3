//! Blueprint module - The five-category preference framework.
//!
//! Covers the category enum, per-category scores with primary/secondary
//! derivation, and quiz answer scoring.

mod category;
mod quiz;
mod scores;

pub use category::Blueprint;
pub use quiz::{score_answers, Agreement, QuizAnswer};
pub use scores::BlueprintScores;
