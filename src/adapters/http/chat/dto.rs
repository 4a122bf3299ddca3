//! Request/response DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatMessage, ChatRole};
use crate::domain::foundation::Timestamp;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageDto {
    pub id: String,
    pub role: ChatRole,
    pub body: String,
    pub created_at: Timestamp,
}

impl From<ChatMessage> for ChatMessageDto {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role(),
            body: message.body().to_string(),
            created_at: message.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatTurnResponse {
    pub user_message: ChatMessageDto,
    pub reply: ChatMessageDto,
}
