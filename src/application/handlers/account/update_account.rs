//! UpdateAccount - Command handler for settings changes.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::UserProfile;
use crate::ports::ProfileRepository;

/// Command to update account settings.
#[derive(Debug, Clone)]
pub struct UpdateAccountCommand {
    pub user_id: UserId,
    pub display_name: Option<String>,
}

/// Handler for account updates.
pub struct UpdateAccountHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl UpdateAccountHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, cmd: UpdateAccountCommand) -> Result<UserProfile, DomainError> {
        let mut profile = self
            .profiles
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;

        if let Some(display_name) = cmd.display_name {
            profile.rename(display_name)?;
        }

        self.profiles.update(&profile).await?;
        Ok(profile)
    }
}
