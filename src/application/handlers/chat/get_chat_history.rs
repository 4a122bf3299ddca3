//! GetChatHistory - Query handler for recent companion messages.

use std::sync::Arc;

use crate::domain::chat::ChatMessage;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ChatRepository;

/// Default number of turns returned.
const DEFAULT_LIMIT: usize = 50;

/// Query for a user's recent chat history.
#[derive(Debug, Clone)]
pub struct GetChatHistoryQuery {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

/// Handler for reading chat history.
pub struct GetChatHistoryHandler {
    chat: Arc<dyn ChatRepository>,
}

impl GetChatHistoryHandler {
    pub fn new(chat: Arc<dyn ChatRepository>) -> Self {
        Self { chat }
    }

    pub async fn handle(&self, query: GetChatHistoryQuery) -> Result<Vec<ChatMessage>, DomainError> {
        self.chat
            .recent_for_user(&query.user_id, query.limit.unwrap_or(DEFAULT_LIMIT))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryChat;
    use crate::domain::chat::ChatRole;
    use crate::ports::ChatRepository as _;

    #[tokio::test]
    async fn history_is_chronological() {
        let chat = Arc::new(InMemoryChat::default());
        let user_id = UserId::new("u1").unwrap();
        for body in ["first", "second"] {
            chat.append(&ChatMessage::new(user_id.clone(), ChatRole::User, body).unwrap())
                .await
                .unwrap();
        }

        let handler = GetChatHistoryHandler::new(chat);
        let history = handler
            .handle(GetChatHistoryQuery {
                user_id,
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(history[0].body(), "first");
        assert_eq!(history[1].body(), "second");
    }
}
