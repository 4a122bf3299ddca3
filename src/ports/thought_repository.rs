//! Thought repository port.

use async_trait::async_trait;

use crate::domain::couple::ThoughtBubble;
use crate::domain::foundation::{DomainError, ThoughtId, UserId};

/// Port for persisting thought bubbles.
#[async_trait]
pub trait ThoughtRepository: Send + Sync {
    /// Appends a new thought.
    async fn append(&self, thought: &ThoughtBubble) -> Result<(), DomainError>;

    /// Finds a thought by id.
    async fn find(&self, id: ThoughtId) -> Result<Option<ThoughtBubble>, DomainError>;

    /// Replaces an existing thought (read marker).
    async fn update(&self, thought: &ThoughtBubble) -> Result<(), DomainError>;

    /// Thoughts received by a user, newest first, up to `limit`.
    async fn received_by(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ThoughtBubble>, DomainError>;

    /// Removes thoughts sent or received by a user. Part of account
    /// deletion.
    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
