//! UnlinkPartner - Command handler for dissolving a couple.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{CoupleRepository, ProfileRepository};

/// Command to unlink from a partner.
#[derive(Debug, Clone)]
pub struct UnlinkPartnerCommand {
    pub user_id: UserId,
}

/// Handler for unlinking.
pub struct UnlinkPartnerHandler {
    profiles: Arc<dyn ProfileRepository>,
    couples: Arc<dyn CoupleRepository>,
}

impl UnlinkPartnerHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, couples: Arc<dyn CoupleRepository>) -> Self {
        Self { profiles, couples }
    }

    pub async fn handle(&self, cmd: UnlinkPartnerCommand) -> Result<(), DomainError> {
        let link = self
            .couples
            .find_link_for_user(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CoupleNotFound, "Couple not found"))?;

        // Unlink both sides; tolerate a missing partner profile.
        for user in [link.user_a().clone(), link.user_b().clone()] {
            if let Some(mut profile) = self.profiles.find_by_user(&user).await? {
                profile.unlink_partner();
                self.profiles.update(&profile).await?;
            }
        }

        self.couples.delete_link(link.id()).await
    }
}
