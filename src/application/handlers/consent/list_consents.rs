//! ListConsents - Query handler for effective consent state.

use std::sync::Arc;

use crate::domain::consent::{effective_consents, ConsentRecord};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ConsentRepository;

/// Query for a user's effective consents.
#[derive(Debug, Clone)]
pub struct ListConsentsQuery {
    pub user_id: UserId,
}

/// Handler for listing consents.
pub struct ListConsentsHandler {
    consents: Arc<dyn ConsentRepository>,
}

impl ListConsentsHandler {
    pub fn new(consents: Arc<dyn ConsentRepository>) -> Self {
        Self { consents }
    }

    /// Returns the latest decision per consent kind.
    pub async fn handle(&self, query: ListConsentsQuery) -> Result<Vec<ConsentRecord>, DomainError> {
        let history = self.consents.history_for_user(&query.user_id).await?;
        Ok(effective_consents(&history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryConsents;
    use crate::domain::consent::ConsentKind;
    use crate::domain::foundation::Timestamp;
    use crate::ports::ConsentRepository as _;

    #[tokio::test]
    async fn revocation_supersedes_grant() {
        let consents = Arc::new(InMemoryConsents::default());
        let user_id = UserId::new("u1").unwrap();

        let mut grant = ConsentRecord::new(user_id.clone(), ConsentKind::Marketing, true);
        grant.recorded_at = Timestamp::from_unix_secs(1000);
        let mut revoke = ConsentRecord::new(user_id.clone(), ConsentKind::Marketing, false);
        revoke.recorded_at = Timestamp::from_unix_secs(2000);
        consents.append(&grant).await.unwrap();
        consents.append(&revoke).await.unwrap();

        let handler = ListConsentsHandler::new(consents);
        let effective = handler.handle(ListConsentsQuery { user_id }).await.unwrap();
        assert_eq!(effective.len(), 1);
        assert!(!effective[0].granted);
    }
}
