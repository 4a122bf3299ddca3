//! GenerateSuggestions - Command handler for AI suggestion generation.
//!
//! The flow: gate on subscription access, serve from the weekly cache
//! when possible, otherwise make a single AI attempt, parse
//! best-effort, and fall back to the static list. The handler never
//! errors on AI failure and never returns an empty batch.

use std::sync::Arc;

use crate::application::handlers::subscription::AccessGate;
use crate::domain::blueprint::Blueprint;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::suggestion::{
    self, ActivityCategory, Intensity, SuggestionBatch,
};
use crate::ports::{
    AiProvider, CompletionPurpose, CompletionRequest, CoupleRepository, MessageRole,
    ProfileRepository, RequestMetadata, SuggestionCache, UsageEvent, UsageTracker,
};

/// How many suggestions each request asks the model for.
const SUGGESTIONS_PER_BATCH: usize = 3;

/// Command to generate suggestions.
#[derive(Debug, Clone)]
pub struct GenerateSuggestionsCommand {
    pub user_id: UserId,
    pub category: ActivityCategory,
    /// Defaults to the couple's shared preference when unset.
    pub intensity: Option<Intensity>,
}

/// Handler for suggestion generation.
pub struct GenerateSuggestionsHandler {
    profiles: Arc<dyn ProfileRepository>,
    couples: Arc<dyn CoupleRepository>,
    gate: Arc<AccessGate>,
    cache: Arc<dyn SuggestionCache>,
    ai: Arc<dyn AiProvider>,
    usage: Arc<dyn UsageTracker>,
}

impl GenerateSuggestionsHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        couples: Arc<dyn CoupleRepository>,
        gate: Arc<AccessGate>,
        cache: Arc<dyn SuggestionCache>,
        ai: Arc<dyn AiProvider>,
        usage: Arc<dyn UsageTracker>,
    ) -> Self {
        Self {
            profiles,
            couples,
            gate,
            cache,
            ai,
            usage,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateSuggestionsCommand,
    ) -> Result<SuggestionBatch, DomainError> {
        let now = Timestamp::now();

        let status = self.gate.evaluate(&cmd.user_id, now).await?;
        if !status.active {
            return Err(DomainError::new(
                ErrorCode::AccessExpired,
                "An active trial or subscription is required",
            ));
        }

        let profile = self
            .profiles
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;
        let user_blueprint = profile.primary_blueprint().ok_or_else(|| {
            DomainError::validation("quiz", "Complete the quiz to get suggestions")
        })?;

        let link = self.couples.find_link_for_user(&cmd.user_id).await?;
        let partner_blueprint = match link
            .as_ref()
            .and_then(|l| l.partner_of(&cmd.user_id))
        {
            Some(partner_id) => self
                .profiles
                .find_by_user(partner_id)
                .await?
                .and_then(|p| p.primary_blueprint()),
            None => None,
        }
        // Solo users get content tuned to their own secondary lean.
        .unwrap_or_else(|| profile.secondary_blueprint().unwrap_or(user_blueprint));

        let intensity = cmd
            .intensity
            .or_else(|| link.as_ref().map(|l| l.shared().default_intensity))
            .unwrap_or(Intensity::Flirty);

        if let Some(cached) = self
            .cache
            .get_fresh(cmd.category, intensity, user_blueprint, partner_blueprint, now)
            .await?
        {
            return Ok(cached);
        }

        let suggestions = self
            .generate(
                &cmd.user_id,
                user_blueprint,
                partner_blueprint,
                cmd.category,
                intensity,
            )
            .await;

        let from_ai = suggestions.is_some();
        let batch = SuggestionBatch {
            category: cmd.category,
            intensity,
            user_blueprint,
            partner_blueprint,
            suggestions: suggestions.unwrap_or_else(|| {
                suggestion::fallback_suggestions(cmd.category, intensity)
            }),
        };

        // Only AI-derived batches are worth a week in the cache.
        if from_ai {
            if let Err(e) = self.cache.put(&batch, now).await {
                tracing::warn!(error = %e, "suggestion cache write failed");
            }
        }

        Ok(batch)
    }

    /// Single AI attempt. Returns None on provider failure or a fully
    /// unusable response.
    async fn generate(
        &self,
        user_id: &UserId,
        user_blueprint: Blueprint,
        partner_blueprint: Blueprint,
        category: ActivityCategory,
        intensity: Intensity,
    ) -> Option<Vec<suggestion::Suggestion>> {
        let request = CompletionRequest::new(RequestMetadata::new(
            user_id.clone(),
            CompletionPurpose::Suggestions,
        ))
        .with_system_prompt(suggestion::system_prompt())
        .with_message(
            MessageRole::User,
            suggestion::suggestion_prompt(
                user_blueprint,
                partner_blueprint,
                category,
                intensity,
                SUGGESTIONS_PER_BATCH,
            ),
        )
        .with_max_tokens(1024)
        .with_temperature(0.9);

        let response = match self.ai.complete(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "suggestion completion failed");
                return None;
            }
        };

        let usage_event = UsageEvent {
            user_id: user_id.clone(),
            purpose: CompletionPurpose::Suggestions,
            model: response.model.clone(),
            usage: response.usage.clone(),
            occurred_at: Timestamp::now(),
        };
        if let Err(e) = self.usage.record(usage_event).await {
            tracing::warn!(error = %e, "usage log write failed");
        }

        let parsed = suggestion::parse_suggestions(&response.content, intensity);
        if parsed.is_empty() {
            None
        } else {
            Some(parsed)
        }
    }
}
