//! Subscription repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::subscription::SubscriptionRecord;

/// Port for persisting subscription records and webhook idempotency.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Creates or replaces the user's subscription record.
    async fn upsert(&self, record: &SubscriptionRecord) -> Result<(), DomainError>;

    /// Finds the user's subscription record, if any.
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SubscriptionRecord>, DomainError>;

    /// True if a provider event id has already been applied.
    async fn has_processed_event(&self, event_id: &str) -> Result<bool, DomainError>;

    /// Marks a provider event id as applied.
    async fn mark_event_processed(&self, event_id: &str) -> Result<(), DomainError>;

    /// Removes the user's record. Part of account deletion.
    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
