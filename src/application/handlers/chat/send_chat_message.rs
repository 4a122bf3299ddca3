//! SendChatMessage - Command handler for companion conversation turns.
//!
//! Stores the user's message, asks the AI provider for a reply with the
//! couple's blueprints in the system prompt, and stores the reply. On
//! provider failure the companion answers with a static line instead of
//! erroring.

use std::sync::Arc;

use crate::domain::chat::{ChatMessage, ChatRole, COMPANION_FALLBACK_REPLY};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::suggestion::companion_system_prompt;
use crate::ports::{
    AiProvider, ChatRepository, CompletionPurpose, CompletionRequest, CoupleRepository,
    MessageRole, ProfileRepository, RequestMetadata, UsageEvent, UsageTracker,
};

/// How many past turns feed the prompt.
const HISTORY_TURNS: usize = 20;

/// Command carrying one user chat turn.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub user_id: UserId,
    pub body: String,
}

/// The companion's reply plus the stored user turn.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub user_message: ChatMessage,
    pub reply: ChatMessage,
}

/// Handler for chat turns.
pub struct SendChatMessageHandler {
    profiles: Arc<dyn ProfileRepository>,
    couples: Arc<dyn CoupleRepository>,
    chat: Arc<dyn ChatRepository>,
    ai: Arc<dyn AiProvider>,
    usage: Arc<dyn UsageTracker>,
}

impl SendChatMessageHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        couples: Arc<dyn CoupleRepository>,
        chat: Arc<dyn ChatRepository>,
        ai: Arc<dyn AiProvider>,
        usage: Arc<dyn UsageTracker>,
    ) -> Self {
        Self {
            profiles,
            couples,
            chat,
            ai,
            usage,
        }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatTurn, DomainError> {
        let user_message = ChatMessage::new(cmd.user_id.clone(), ChatRole::User, cmd.body)?;

        let history = self
            .chat
            .recent_for_user(&cmd.user_id, HISTORY_TURNS)
            .await?;
        self.chat.append(&user_message).await?;

        let reply_body = self
            .companion_reply(&cmd.user_id, &history, user_message.body())
            .await
            .unwrap_or_else(|| COMPANION_FALLBACK_REPLY.to_string());

        let reply = ChatMessage::new(cmd.user_id, ChatRole::Companion, reply_body)?;
        self.chat.append(&reply).await?;

        Ok(ChatTurn {
            user_message,
            reply,
        })
    }

    /// Single AI attempt; None on failure.
    async fn companion_reply(
        &self,
        user_id: &UserId,
        history: &[ChatMessage],
        body: &str,
    ) -> Option<String> {
        // Blueprint context is best-effort; the companion works without it.
        let (user_blueprint, partner_blueprint) = match self.blueprints_for(user_id).await {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(error = %e, "could not load blueprints for chat");
                (None, None)
            }
        };

        let mut request = CompletionRequest::new(RequestMetadata::new(
            user_id.clone(),
            CompletionPurpose::Companion,
        ))
        .with_system_prompt(companion_system_prompt(user_blueprint, partner_blueprint))
        .with_max_tokens(512)
        .with_temperature(0.7);

        for message in history {
            let role = match message.role() {
                ChatRole::User => MessageRole::User,
                ChatRole::Companion => MessageRole::Assistant,
            };
            request = request.with_message(role, message.body());
        }
        request = request.with_message(MessageRole::User, body);

        match self.ai.complete(request).await {
            Ok(response) => {
                let event = UsageEvent {
                    user_id: user_id.clone(),
                    purpose: CompletionPurpose::Companion,
                    model: response.model.clone(),
                    usage: response.usage.clone(),
                    occurred_at: Timestamp::now(),
                };
                if let Err(e) = self.usage.record(event).await {
                    tracing::warn!(error = %e, "usage log write failed");
                }
                Some(response.content)
            }
            Err(e) => {
                tracing::error!(error = %e, "companion completion failed");
                None
            }
        }
    }

    async fn blueprints_for(
        &self,
        user_id: &UserId,
    ) -> Result<
        (
            Option<crate::domain::blueprint::Blueprint>,
            Option<crate::domain::blueprint::Blueprint>,
        ),
        DomainError,
    > {
        let profile = self.profiles.find_by_user(user_id).await?;
        let user_blueprint = profile.as_ref().and_then(|p| p.primary_blueprint());

        let partner_blueprint = match self.couples.find_link_for_user(user_id).await? {
            Some(link) => match link.partner_of(user_id) {
                Some(partner_id) => self
                    .profiles
                    .find_by_user(partner_id)
                    .await?
                    .and_then(|p| p.primary_blueprint()),
                None => None,
            },
            None => None,
        };

        Ok((user_blueprint, partner_blueprint))
    }
}
