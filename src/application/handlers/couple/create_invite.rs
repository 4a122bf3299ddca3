//! CreateInvite - Command handler for starting the partner-connect flow.

use std::sync::Arc;

use crate::domain::couple::PartnerInvite;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::{CoupleRepository, ProfileRepository};

/// Command to create a partner invite code.
#[derive(Debug, Clone)]
pub struct CreateInviteCommand {
    pub user_id: UserId,
}

/// Handler for creating invites.
pub struct CreateInviteHandler {
    profiles: Arc<dyn ProfileRepository>,
    couples: Arc<dyn CoupleRepository>,
}

impl CreateInviteHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, couples: Arc<dyn CoupleRepository>) -> Self {
        Self { profiles, couples }
    }

    pub async fn handle(&self, cmd: CreateInviteCommand) -> Result<PartnerInvite, DomainError> {
        let profile = self
            .profiles
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;

        if profile.has_partner() {
            return Err(DomainError::new(
                ErrorCode::AlreadyLinked,
                "Already linked to a partner",
            ));
        }

        let invite = PartnerInvite::new(cmd.user_id, Timestamp::now());
        self.couples.create_invite(&invite).await?;
        Ok(invite)
    }
}
