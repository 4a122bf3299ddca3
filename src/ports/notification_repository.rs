//! Notification repository port - Preferences and device tokens.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::notification::{DeviceToken, NotificationPreferences};

/// Port for persisting notification preferences and device tokens.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Returns the user's preferences, or None if never saved.
    async fn get_preferences(
        &self,
        user_id: &UserId,
    ) -> Result<Option<NotificationPreferences>, DomainError>;

    /// Creates or replaces the user's preferences.
    async fn put_preferences(
        &self,
        user_id: &UserId,
        preferences: &NotificationPreferences,
    ) -> Result<(), DomainError>;

    /// Registers a device token, replacing any prior registration of the
    /// same token.
    async fn register_device(&self, token: &DeviceToken) -> Result<(), DomainError>;

    /// Returns all of a user's registered device tokens.
    async fn devices_for_user(&self, user_id: &UserId) -> Result<Vec<DeviceToken>, DomainError>;

    /// Removes preferences and tokens. Part of account deletion.
    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
