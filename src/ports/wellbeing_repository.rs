//! Wellbeing repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellbeing::CheckinRecord;

/// Port for the append-only check-in history.
#[async_trait]
pub trait WellbeingRepository: Send + Sync {
    /// Appends one check-in.
    async fn append(&self, record: &CheckinRecord) -> Result<(), DomainError>;

    /// The user's history, newest first, up to `limit`.
    async fn history_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<CheckinRecord>, DomainError>;

    /// Removes the user's history. Part of account deletion.
    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
