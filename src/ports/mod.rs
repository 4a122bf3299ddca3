//! Ports layer - Async traits at the seams between domain and adapters.

mod ai_provider;
mod analysis_cache;
mod chat_repository;
mod consent_repository;
mod couple_repository;
mod feedback_repository;
mod notification_repository;
mod profile_repository;
mod push_sender;
mod subscription_repository;
mod suggestion_cache;
mod thought_repository;
mod token_verifier;
mod usage_tracker;
mod wellbeing_repository;

pub use ai_provider::{
    AiError, AiProvider, CompletionPurpose, CompletionRequest, CompletionResponse, FinishReason,
    Message, MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use analysis_cache::AnalysisCache;
pub use chat_repository::ChatRepository;
pub use consent_repository::ConsentRepository;
pub use couple_repository::CoupleRepository;
pub use feedback_repository::FeedbackRepository;
pub use notification_repository::NotificationRepository;
pub use profile_repository::ProfileRepository;
pub use push_sender::{PushError, PushSender};
pub use subscription_repository::SubscriptionRepository;
pub use suggestion_cache::{SuggestionCache, SUGGESTION_CACHE_DAYS};
pub use thought_repository::ThoughtRepository;
pub use token_verifier::TokenVerifier;
pub use usage_tracker::{UsageEvent, UsageTracker};
pub use wellbeing_repository::WellbeingRepository;
