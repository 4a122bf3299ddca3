//! GetNotificationPreferences - Query handler for the toggle set.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::notification::NotificationPreferences;
use crate::ports::NotificationRepository;

/// Query for notification preferences.
#[derive(Debug, Clone)]
pub struct GetPreferencesQuery {
    pub user_id: UserId,
}

/// Handler for reading preferences. Users who never saved get the
/// defaults.
pub struct GetPreferencesHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl GetPreferencesHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(
        &self,
        query: GetPreferencesQuery,
    ) -> Result<NotificationPreferences, DomainError> {
        Ok(self
            .notifications
            .get_preferences(&query.user_id)
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryNotifications;

    #[tokio::test]
    async fn unsaved_user_gets_defaults() {
        let handler = GetPreferencesHandler::new(Arc::new(InMemoryNotifications::default()));
        let prefs = handler
            .handle(GetPreferencesQuery {
                user_id: UserId::new("u1").unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(prefs, NotificationPreferences::default());
    }
}
