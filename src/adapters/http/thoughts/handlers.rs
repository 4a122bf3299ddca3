//! HTTP handlers for thought bubble endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::thought::{
    ListThoughtsHandler, ListThoughtsQuery, MarkThoughtReadCommand, MarkThoughtReadHandler,
    SendThoughtCommand, SendThoughtHandler,
};
use crate::domain::foundation::ThoughtId;

use super::dto::{SendThoughtRequest, ThoughtResponse};

#[derive(Clone)]
pub struct ThoughtHandlers {
    pub send: Arc<SendThoughtHandler>,
    pub list: Arc<ListThoughtsHandler>,
    pub mark_read: Arc<MarkThoughtReadHandler>,
}

/// POST /api/thoughts - Send the partner a thought
pub async fn send_thought(
    State(handlers): State<ThoughtHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SendThoughtRequest>,
) -> Response {
    let cmd = SendThoughtCommand {
        user_id: user.id,
        body: req.body,
    };
    match handlers.send.handle(cmd).await {
        Ok(thought) => {
            (StatusCode::CREATED, Json(ThoughtResponse::from(thought))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/thoughts - Thoughts received by the caller
pub async fn list_thoughts(
    State(handlers): State<ThoughtHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .list
        .handle(ListThoughtsQuery {
            user_id: user.id,
            limit: None,
        })
        .await
    {
        Ok(thoughts) => {
            let body: Vec<ThoughtResponse> =
                thoughts.into_iter().map(ThoughtResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/thoughts/{id}/read - Mark a thought read
pub async fn mark_thought_read(
    State(handlers): State<ThoughtHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let thought_id = match id.parse::<ThoughtId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("INVALID_FORMAT", "Invalid thought id")),
            )
                .into_response()
        }
    };

    let cmd = MarkThoughtReadCommand {
        user_id: user.id,
        thought_id,
    };
    match handlers.mark_read.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
