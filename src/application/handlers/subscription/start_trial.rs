//! StartTrial - Command handler for starting the free trial.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::UserProfile;
use crate::ports::ProfileRepository;

/// Command to start the free trial.
#[derive(Debug, Clone)]
pub struct StartTrialCommand {
    pub user_id: UserId,
}

/// Handler for trial starts.
pub struct StartTrialHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl StartTrialHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, cmd: StartTrialCommand) -> Result<UserProfile, DomainError> {
        let mut profile = self
            .profiles
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;

        profile.start_trial(Timestamp::now())?;
        self.profiles.update(&profile).await?;
        Ok(profile)
    }
}
