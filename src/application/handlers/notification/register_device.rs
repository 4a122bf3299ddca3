//! RegisterDevice - Command handler for push token registration.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::notification::DeviceToken;
use crate::ports::NotificationRepository;

/// Command to register a device push token.
#[derive(Debug, Clone)]
pub struct RegisterDeviceCommand {
    pub user_id: UserId,
    pub token: String,
    pub platform: String,
}

/// Handler for device registration.
pub struct RegisterDeviceHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl RegisterDeviceHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(&self, cmd: RegisterDeviceCommand) -> Result<DeviceToken, DomainError> {
        let token = DeviceToken::new(cmd.user_id, cmd.token, cmd.platform)?;
        self.notifications.register_device(&token).await?;
        Ok(token)
    }
}
