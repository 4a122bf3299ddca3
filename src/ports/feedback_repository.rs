//! Feedback repository port.

use async_trait::async_trait;

use crate::domain::feedback::FeedbackRecord;
use crate::domain::foundation::{DomainError, UserId};

/// Port for the append-only feedback history.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Appends one record to the user's history.
    async fn append(&self, record: &FeedbackRecord) -> Result<(), DomainError>;

    /// Returns the user's history, newest first, up to `limit` records.
    async fn history_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<FeedbackRecord>, DomainError>;

    /// Removes all of a user's records. Part of account deletion.
    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
