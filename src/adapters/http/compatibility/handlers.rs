//! HTTP handlers for compatibility endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::compatibility::{GetAnalysisHandler, GetAnalysisQuery};

use super::dto::CompatibilityResponse;

#[derive(Clone)]
pub struct CompatibilityHandlers {
    pub get_analysis: Arc<GetAnalysisHandler>,
}

/// GET /api/compatibility - The couple's compatibility analysis
pub async fn get_compatibility(
    State(handlers): State<CompatibilityHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .get_analysis
        .handle(GetAnalysisQuery { user_id: user.id })
        .await
    {
        Ok(analysis) => {
            (StatusCode::OK, Json(CompatibilityResponse::from(analysis))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
