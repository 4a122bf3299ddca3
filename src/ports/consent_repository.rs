//! Consent repository port.

use async_trait::async_trait;

use crate::domain::consent::ConsentRecord;
use crate::domain::foundation::{DomainError, UserId};

/// Port for the append-only consent history.
#[async_trait]
pub trait ConsentRepository: Send + Sync {
    /// Appends one consent decision.
    async fn append(&self, record: &ConsentRecord) -> Result<(), DomainError>;

    /// Returns the user's full consent history, oldest first.
    async fn history_for_user(&self, user_id: &UserId)
        -> Result<Vec<ConsentRecord>, DomainError>;

    /// Removes all of a user's records. Part of account deletion.
    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
