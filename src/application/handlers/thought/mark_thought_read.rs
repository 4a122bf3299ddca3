//! MarkThoughtRead - Command handler for the read marker.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ThoughtId, Timestamp, UserId};
use crate::ports::ThoughtRepository;

/// Command to mark a received thought as read.
#[derive(Debug, Clone)]
pub struct MarkThoughtReadCommand {
    pub user_id: UserId,
    pub thought_id: ThoughtId,
}

/// Handler for read markers.
pub struct MarkThoughtReadHandler {
    thoughts: Arc<dyn ThoughtRepository>,
}

impl MarkThoughtReadHandler {
    pub fn new(thoughts: Arc<dyn ThoughtRepository>) -> Self {
        Self { thoughts }
    }

    pub async fn handle(&self, cmd: MarkThoughtReadCommand) -> Result<(), DomainError> {
        let mut thought = self
            .thoughts
            .find(cmd.thought_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::NotFound, "Thought not found"))?;

        // Only the recipient may mark a thought read.
        if thought.to() != &cmd.user_id {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Thought belongs to another user",
            ));
        }

        thought.mark_read(Timestamp::now());
        self.thoughts.update(&thought).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryThoughts;
    use crate::domain::couple::ThoughtBubble;
    use crate::ports::ThoughtRepository as _;

    fn user(n: &str) -> UserId {
        UserId::new(n).unwrap()
    }

    async fn stored_thought(thoughts: &InMemoryThoughts) -> ThoughtId {
        let thought = ThoughtBubble::new(user("a"), user("b"), "hi").unwrap();
        let id = thought.id();
        thoughts.append(&thought).await.unwrap();
        id
    }

    #[tokio::test]
    async fn recipient_can_mark_read() {
        let thoughts = Arc::new(InMemoryThoughts::default());
        let id = stored_thought(&thoughts).await;
        let handler = MarkThoughtReadHandler::new(thoughts.clone());

        handler
            .handle(MarkThoughtReadCommand {
                user_id: user("b"),
                thought_id: id,
            })
            .await
            .unwrap();

        assert!(thoughts.find(id).await.unwrap().unwrap().is_read());
    }

    #[tokio::test]
    async fn sender_cannot_mark_read() {
        let thoughts = Arc::new(InMemoryThoughts::default());
        let id = stored_thought(&thoughts).await;
        let handler = MarkThoughtReadHandler::new(thoughts);

        let err = handler
            .handle(MarkThoughtReadCommand {
                user_id: user("a"),
                thought_id: id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }
}
