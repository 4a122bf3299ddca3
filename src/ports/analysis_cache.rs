//! Analysis cache port.
//!
//! Compatibility analyses are static content, but the original clients
//! re-request them on every screen load; the cache keeps those reads
//! from recomputing the response body. Same weekly window as the
//! suggestion cache.

use async_trait::async_trait;

use crate::domain::blueprint::Blueprint;
use crate::domain::compatibility::CompatibilityAnalysis;
use crate::domain::foundation::{DomainError, Timestamp};

/// Port for the compatibility analysis cache.
#[async_trait]
pub trait AnalysisCache: Send + Sync {
    /// Returns a cached analysis no older than the freshness window.
    async fn get_fresh(
        &self,
        user_blueprint: Blueprint,
        partner_blueprint: Blueprint,
        now: Timestamp,
    ) -> Result<Option<CompatibilityAnalysis>, DomainError>;

    /// Stores an analysis, replacing any entry under the same key.
    async fn put(
        &self,
        analysis: &CompatibilityAnalysis,
        now: Timestamp,
    ) -> Result<(), DomainError>;
}
