//! Feedback handlers.

mod get_preference_summary;
mod record_feedback;

pub use get_preference_summary::{
    GetPreferenceSummaryHandler, GetPreferenceSummaryQuery, PreferenceSummary,
};
pub use record_feedback::{RecordFeedbackCommand, RecordFeedbackHandler};
