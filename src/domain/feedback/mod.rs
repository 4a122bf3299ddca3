//! Feedback module - Reactions and derived preference aggregation.

mod preferences;
mod reaction;

pub use preferences::{CategoryCounts, PreferenceProfile};
pub use reaction::{FeedbackRecord, Reaction};
