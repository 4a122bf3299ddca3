//! HTTP handlers for the chat companion.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::chat::{
    GetChatHistoryHandler, GetChatHistoryQuery, SendChatMessageCommand, SendChatMessageHandler,
};

use super::dto::{ChatMessageDto, ChatTurnResponse, SendMessageRequest};

#[derive(Clone)]
pub struct ChatHandlers {
    pub send: Arc<SendChatMessageHandler>,
    pub history: Arc<GetChatHistoryHandler>,
}

/// POST /api/chat - One companion turn
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let cmd = SendChatMessageCommand {
        user_id: user.id,
        body: req.body,
    };
    match handlers.send.handle(cmd).await {
        Ok(turn) => (
            StatusCode::OK,
            Json(ChatTurnResponse {
                user_message: ChatMessageDto::from(turn.user_message),
                reply: ChatMessageDto::from(turn.reply),
            }),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/chat - Recent history
pub async fn get_history(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .history
        .handle(GetChatHistoryQuery {
            user_id: user.id,
            limit: None,
        })
        .await
    {
        Ok(messages) => {
            let body: Vec<ChatMessageDto> =
                messages.into_iter().map(ChatMessageDto::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
