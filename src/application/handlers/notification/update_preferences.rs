//! UpdateNotificationPreferences - Command handler for the toggle set.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::notification::NotificationPreferences;
use crate::ports::NotificationRepository;

/// Command carrying the full replacement toggle set.
#[derive(Debug, Clone)]
pub struct UpdatePreferencesCommand {
    pub user_id: UserId,
    pub preferences: NotificationPreferences,
}

/// Handler for preference updates.
pub struct UpdatePreferencesHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl UpdatePreferencesHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePreferencesCommand,
    ) -> Result<NotificationPreferences, DomainError> {
        self.notifications
            .put_preferences(&cmd.user_id, &cmd.preferences)
            .await?;
        if cmd.preferences.all_muted() {
            tracing::info!(user = %cmd.user_id, "user muted all notifications");
        }
        Ok(cmd.preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryNotifications;
    use crate::ports::NotificationRepository as _;

    #[tokio::test]
    async fn saved_preferences_replace_defaults() {
        let notifications = Arc::new(InMemoryNotifications::default());
        let handler = UpdatePreferencesHandler::new(notifications.clone());
        let user_id = UserId::new("u1").unwrap();

        let muted = NotificationPreferences {
            daily_spark: false,
            partner_activity: false,
            trial_reminders: false,
            tips: false,
        };
        handler
            .handle(UpdatePreferencesCommand {
                user_id: user_id.clone(),
                preferences: muted,
            })
            .await
            .unwrap();

        let stored = notifications
            .get_preferences(&user_id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.all_muted());
    }
}
