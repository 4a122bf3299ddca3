//! Usage tracker port - The AI usage log.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{CompletionPurpose, TokenUsage};

/// One logged AI call.
#[derive(Debug, Clone)]
pub struct UsageEvent {
    pub user_id: UserId,
    pub purpose: CompletionPurpose,
    pub model: String,
    pub usage: TokenUsage,
    pub occurred_at: Timestamp,
}

/// Port for recording AI usage.
///
/// Recording is best-effort: callers log failures and move on rather
/// than failing the user's request over accounting.
#[async_trait]
pub trait UsageTracker: Send + Sync {
    /// Appends one usage event to the log.
    async fn record(&self, event: UsageEvent) -> Result<(), DomainError>;

    /// Total tokens a user has consumed.
    async fn total_tokens_for_user(&self, user_id: &UserId) -> Result<u64, DomainError>;
}
