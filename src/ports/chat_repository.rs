//! Chat repository port.

use async_trait::async_trait;

use crate::domain::chat::ChatMessage;
use crate::domain::foundation::{DomainError, UserId};

/// Port for persisting companion conversations.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Appends one message.
    async fn append(&self, message: &ChatMessage) -> Result<(), DomainError>;

    /// The user's most recent messages in chronological order, up to
    /// `limit`.
    async fn recent_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, DomainError>;

    /// Removes the user's conversation. Part of account deletion.
    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
