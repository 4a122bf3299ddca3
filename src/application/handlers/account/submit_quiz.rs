//! SubmitQuiz - Command handler for quiz completion.

use std::sync::Arc;

use crate::domain::blueprint::QuizAnswer;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::UserProfile;
use crate::ports::ProfileRepository;

/// Command carrying a full quiz submission.
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub user_id: UserId,
    pub answers: Vec<QuizAnswer>,
}

/// Handler for quiz submissions.
pub struct SubmitQuizHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl SubmitQuizHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, cmd: SubmitQuizCommand) -> Result<UserProfile, DomainError> {
        let mut profile = self
            .profiles
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;

        profile.apply_quiz(cmd.answers)?;
        self.profiles.update(&profile).await?;
        Ok(profile)
    }
}
