//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the Duet domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    ChatMessageId, CheckinId, CoupleId, FeedbackId, InviteId, SubscriptionId, SuggestionId,
    ThoughtId, UserId,
};
pub use timestamp::Timestamp;
