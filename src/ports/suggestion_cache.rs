//! Suggestion cache port.
//!
//! Generated batches are cached for a week, keyed by activity category,
//! intensity, and the ordered blueprint pair. The key is content-shaped
//! rather than user-shaped: two couples with the same pairing share
//! cache entries.

use async_trait::async_trait;

use crate::domain::blueprint::Blueprint;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::suggestion::{ActivityCategory, Intensity, SuggestionBatch};

/// How long a cached batch stays fresh.
pub const SUGGESTION_CACHE_DAYS: i64 = 7;

/// Port for the weekly suggestion cache.
#[async_trait]
pub trait SuggestionCache: Send + Sync {
    /// Returns a cached batch no older than the freshness window.
    async fn get_fresh(
        &self,
        category: ActivityCategory,
        intensity: Intensity,
        user_blueprint: Blueprint,
        partner_blueprint: Blueprint,
        now: Timestamp,
    ) -> Result<Option<SuggestionBatch>, DomainError>;

    /// Stores a batch, replacing any entry under the same key.
    async fn put(&self, batch: &SuggestionBatch, now: Timestamp) -> Result<(), DomainError>;
}
