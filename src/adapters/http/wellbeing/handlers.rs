//! HTTP handlers for wellbeing endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::wellbeing::{
    ListCheckinsHandler, ListCheckinsQuery, RecordCheckinCommand, RecordCheckinHandler,
};

use super::dto::{CheckinResponse, RecordCheckinRequest};

#[derive(Clone)]
pub struct WellbeingHandlers {
    pub record: Arc<RecordCheckinHandler>,
    pub list: Arc<ListCheckinsHandler>,
}

/// POST /api/wellbeing - Record a check-in
pub async fn record_checkin(
    State(handlers): State<WellbeingHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RecordCheckinRequest>,
) -> Response {
    let cmd = RecordCheckinCommand {
        user_id: user.id,
        mood: req.mood,
        connection: req.connection,
        note: req.note,
    };
    match handlers.record.handle(cmd).await {
        Ok(record) => (StatusCode::CREATED, Json(CheckinResponse::from(record))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/wellbeing - Check-in history
pub async fn list_checkins(
    State(handlers): State<WellbeingHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .list
        .handle(ListCheckinsQuery {
            user_id: user.id,
            limit: None,
        })
        .await
    {
        Ok(records) => {
            let body: Vec<CheckinResponse> =
                records.into_iter().map(CheckinResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
