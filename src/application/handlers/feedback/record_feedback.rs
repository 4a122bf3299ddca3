//! RecordFeedback - Command handler for suggestion reactions.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackRecord, Reaction};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::suggestion::{ActivityCategory, Intensity};
use crate::ports::FeedbackRepository;

/// Command to record a reaction to a shown suggestion.
#[derive(Debug, Clone)]
pub struct RecordFeedbackCommand {
    pub user_id: UserId,
    pub category: ActivityCategory,
    pub intensity: Intensity,
    pub suggestion_title: String,
    pub reaction: Reaction,
}

/// Handler for recording feedback.
pub struct RecordFeedbackHandler {
    feedback: Arc<dyn FeedbackRepository>,
}

impl RecordFeedbackHandler {
    pub fn new(feedback: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback }
    }

    pub async fn handle(&self, cmd: RecordFeedbackCommand) -> Result<FeedbackRecord, DomainError> {
        let record = FeedbackRecord::new(
            cmd.user_id,
            cmd.category,
            cmd.intensity,
            cmd.suggestion_title,
            cmd.reaction,
        )?;
        self.feedback.append(&record).await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryFeedback;
    use crate::ports::FeedbackRepository as _;

    #[tokio::test]
    async fn appends_to_history() {
        let feedback = Arc::new(InMemoryFeedback::default());
        let handler = RecordFeedbackHandler::new(feedback.clone());
        let user_id = UserId::new("u1").unwrap();

        handler
            .handle(RecordFeedbackCommand {
                user_id: user_id.clone(),
                category: ActivityCategory::Play,
                intensity: Intensity::Flirty,
                suggestion_title: "Two truths".to_string(),
                reaction: Reaction::Love,
            })
            .await
            .unwrap();

        let history = feedback.history_for_user(&user_id, 10).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].reaction(), Reaction::Love);
    }

    #[tokio::test]
    async fn untitled_feedback_is_rejected() {
        let handler = RecordFeedbackHandler::new(Arc::new(InMemoryFeedback::default()));
        let result = handler
            .handle(RecordFeedbackCommand {
                user_id: UserId::new("u1").unwrap(),
                category: ActivityCategory::Play,
                intensity: Intensity::Flirty,
                suggestion_title: "".to_string(),
                reaction: Reaction::Pass,
            })
            .await;
        assert!(result.is_err());
    }
}
