//! ListThoughts - Query handler for received thought bubbles.

use std::sync::Arc;

use crate::domain::couple::ThoughtBubble;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ThoughtRepository;

/// Default page size for the thought list.
const DEFAULT_LIMIT: usize = 50;

/// Query for thoughts received by a user.
#[derive(Debug, Clone)]
pub struct ListThoughtsQuery {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

/// Handler for listing received thoughts.
pub struct ListThoughtsHandler {
    thoughts: Arc<dyn ThoughtRepository>,
}

impl ListThoughtsHandler {
    pub fn new(thoughts: Arc<dyn ThoughtRepository>) -> Self {
        Self { thoughts }
    }

    pub async fn handle(
        &self,
        query: ListThoughtsQuery,
    ) -> Result<Vec<ThoughtBubble>, DomainError> {
        self.thoughts
            .received_by(&query.user_id, query.limit.unwrap_or(DEFAULT_LIMIT))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryThoughts;
    use crate::ports::ThoughtRepository as _;

    fn user(n: &str) -> UserId {
        UserId::new(n).unwrap()
    }

    #[tokio::test]
    async fn lists_only_received_thoughts() {
        let thoughts = Arc::new(InMemoryThoughts::default());
        thoughts
            .append(&ThoughtBubble::new(user("a"), user("b"), "to b").unwrap())
            .await
            .unwrap();
        thoughts
            .append(&ThoughtBubble::new(user("b"), user("a"), "to a").unwrap())
            .await
            .unwrap();

        let handler = ListThoughtsHandler::new(thoughts);
        let received = handler
            .handle(ListThoughtsQuery {
                user_id: user("b"),
                limit: None,
            })
            .await
            .unwrap();

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].body(), "to b");
    }
}
