//! HTTP handlers for suggestion endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::suggestion::{
    GenerateSuggestionsCommand, GenerateSuggestionsHandler,
};

use super::dto::{GenerateSuggestionsRequest, SuggestionBatchResponse};

#[derive(Clone)]
pub struct SuggestionHandlers {
    pub generate: Arc<GenerateSuggestionsHandler>,
}

/// POST /api/suggestions - Generate (or serve cached) suggestions
pub async fn generate_suggestions(
    State(handlers): State<SuggestionHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<GenerateSuggestionsRequest>,
) -> Response {
    let cmd = GenerateSuggestionsCommand {
        user_id: user.id,
        category: req.category,
        intensity: req.intensity,
    };
    match handlers.generate.handle(cmd).await {
        Ok(batch) => {
            (StatusCode::OK, Json(SuggestionBatchResponse::from(batch))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
