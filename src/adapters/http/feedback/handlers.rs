//! HTTP handlers for feedback endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::feedback::{
    GetPreferenceSummaryHandler, GetPreferenceSummaryQuery, RecordFeedbackCommand,
    RecordFeedbackHandler,
};

use super::dto::{FeedbackResponse, PreferenceSummaryResponse, RecordFeedbackRequest};

#[derive(Clone)]
pub struct FeedbackHandlers {
    pub record: Arc<RecordFeedbackHandler>,
    pub summary: Arc<GetPreferenceSummaryHandler>,
}

/// POST /api/feedback - Record a reaction to a shown suggestion
pub async fn record_feedback(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RecordFeedbackRequest>,
) -> Response {
    let cmd = RecordFeedbackCommand {
        user_id: user.id,
        category: req.category,
        intensity: req.intensity,
        suggestion_title: req.suggestion_title,
        reaction: req.reaction,
    };
    match handlers.record.handle(cmd).await {
        Ok(record) => {
            (StatusCode::CREATED, Json(FeedbackResponse::from(record))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/feedback - Aggregated preference profile
pub async fn get_preference_summary(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .summary
        .handle(GetPreferenceSummaryQuery { user_id: user.id })
        .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(PreferenceSummaryResponse::from(summary)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}
