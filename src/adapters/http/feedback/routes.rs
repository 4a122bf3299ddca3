//! HTTP routes for feedback endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_preference_summary, record_feedback, FeedbackHandlers};

/// Creates the feedback router, mounted at /api/feedback.
pub fn feedback_routes(handlers: FeedbackHandlers) -> Router {
    Router::new()
        .route("/", get(get_preference_summary).post(record_feedback))
        .with_state(handlers)
}
