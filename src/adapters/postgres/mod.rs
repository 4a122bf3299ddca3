//! PostgreSQL adapters - Repository implementations over sqlx.
//!
//! Row mapping is done by hand: key columns are plain SQL types and
//! structured payloads live in JSONB columns.

mod analysis_cache;
mod chat_repository;
mod consent_repository;
mod couple_repository;
mod feedback_repository;
mod notification_repository;
mod profile_repository;
mod subscription_repository;
mod suggestion_cache;
mod thought_repository;
mod usage_log;
mod wellbeing_repository;

pub use analysis_cache::PgAnalysisCache;
pub use chat_repository::PgChatRepository;
pub use consent_repository::PgConsentRepository;
pub use couple_repository::PgCoupleRepository;
pub use feedback_repository::PgFeedbackRepository;
pub use notification_repository::PgNotificationRepository;
pub use profile_repository::PgProfileRepository;
pub use subscription_repository::PgSubscriptionRepository;
pub use suggestion_cache::PgSuggestionCache;
pub use thought_repository::PgThoughtRepository;
pub use usage_log::PgUsageLog;
pub use wellbeing_repository::PgWellbeingRepository;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Maps an sqlx error into the uniform database error.
pub(crate) fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("database error: {}", e))
}

/// Maps a JSONB (de)serialization failure.
pub(crate) fn json_err(e: serde_json::Error) -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        format!("failed to map stored JSON: {}", e),
    )
}
