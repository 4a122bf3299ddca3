//! Chat module - Companion conversation messages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChatMessageId, DomainError, Timestamp, UserId, ValidationError};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Companion,
}

/// One turn in a user's companion conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: ChatMessageId,
    user_id: UserId,
    role: ChatRole,
    body: String,
    created_at: Timestamp,
}

impl ChatMessage {
    pub fn new(user_id: UserId, role: ChatRole, body: impl Into<String>) -> Result<Self, DomainError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(ValidationError::empty_field("body").into());
        }
        Ok(Self {
            id: ChatMessageId::new(),
            user_id,
            role,
            body,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstructs a message from persisted state.
    pub fn restore(
        id: ChatMessageId,
        user_id: UserId,
        role: ChatRole,
        body: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            role,
            body,
            created_at,
        }
    }

    pub fn id(&self) -> ChatMessageId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// The reply used when the AI provider is unavailable.
pub const COMPANION_FALLBACK_REPLY: &str =
    "I'm having trouble thinking right now. Give me a moment and ask again?";
