//! HTTP handlers for consent endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::consent::{
    ListConsentsHandler, ListConsentsQuery, RecordConsentCommand, RecordConsentHandler,
};

use super::dto::{ConsentResponse, RecordConsentRequest};

#[derive(Clone)]
pub struct ConsentHandlers {
    pub record: Arc<RecordConsentHandler>,
    pub list: Arc<ListConsentsHandler>,
}

/// POST /api/consent - Record a consent decision
pub async fn record_consent(
    State(handlers): State<ConsentHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RecordConsentRequest>,
) -> Response {
    let cmd = RecordConsentCommand {
        user_id: user.id,
        kind: req.kind,
        granted: req.granted,
    };
    match handlers.record.handle(cmd).await {
        Ok(record) => (StatusCode::CREATED, Json(ConsentResponse::from(record))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/consent - Effective consent state
pub async fn list_consents(
    State(handlers): State<ConsentHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .list
        .handle(ListConsentsQuery { user_id: user.id })
        .await
    {
        Ok(records) => {
            let body: Vec<ConsentResponse> =
                records.into_iter().map(ConsentResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
