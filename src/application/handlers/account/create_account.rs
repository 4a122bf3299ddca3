//! CreateAccount - Command handler for signup.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::UserProfile;
use crate::ports::ProfileRepository;

/// Command to create a profile at signup.
#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
}

/// Handler for creating accounts.
pub struct CreateAccountHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl CreateAccountHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, cmd: CreateAccountCommand) -> Result<UserProfile, DomainError> {
        if self.profiles.find_by_user(&cmd.user_id).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                "Profile already exists for this user",
            ));
        }

        let profile = UserProfile::new(cmd.user_id, cmd.email, cmd.display_name)?;
        self.profiles.create(&profile).await?;
        Ok(profile)
    }
}
