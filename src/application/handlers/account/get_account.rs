//! GetAccount - Query handler for the profile summary.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserProfile;
use crate::ports::ProfileRepository;

/// Query for a user's own profile.
#[derive(Debug, Clone)]
pub struct GetAccountQuery {
    pub user_id: UserId,
}

/// Handler for reading the account profile.
pub struct GetAccountHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetAccountHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: GetAccountQuery) -> Result<Option<UserProfile>, DomainError> {
        self.profiles.find_by_user(&query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryProfiles;

    #[tokio::test]
    async fn returns_none_for_unknown_user() {
        let handler = GetAccountHandler::new(Arc::new(InMemoryProfiles::default()));
        let result = handler
            .handle(GetAccountQuery {
                user_id: UserId::new("nobody").unwrap(),
            })
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn returns_stored_profile() {
        let user_id = UserId::new("u1").unwrap();
        let profile = UserProfile::new(user_id.clone(), "a@b.c", "Ada").unwrap();
        let handler = GetAccountHandler::new(Arc::new(InMemoryProfiles::with(profile)));

        let result = handler.handle(GetAccountQuery { user_id }).await.unwrap();
        assert_eq!(result.unwrap().display_name(), "Ada");
    }
}
