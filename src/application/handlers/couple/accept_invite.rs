//! AcceptInvite - Command handler for redeeming a partner invite.
//!
//! Redemption links both profiles bidirectionally. The writes are
//! sequential; a failure partway leaves the earlier writes in place and
//! surfaces the error.

use std::sync::Arc;

use crate::domain::couple::{validate_invite_code, CoupleLink};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::{CoupleRepository, ProfileRepository};

/// Command to redeem an invite code.
#[derive(Debug, Clone)]
pub struct AcceptInviteCommand {
    pub user_id: UserId,
    pub code: String,
}

/// Handler for invite redemption.
pub struct AcceptInviteHandler {
    profiles: Arc<dyn ProfileRepository>,
    couples: Arc<dyn CoupleRepository>,
}

impl AcceptInviteHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, couples: Arc<dyn CoupleRepository>) -> Self {
        Self { profiles, couples }
    }

    pub async fn handle(&self, cmd: AcceptInviteCommand) -> Result<CoupleLink, DomainError> {
        let code = cmd.code.trim().to_uppercase();
        validate_invite_code(&code)?;

        let mut invite = self
            .couples
            .find_invite_by_code(&code)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::InviteNotFound, "Invite not found"))?;

        let now = Timestamp::now();
        invite.redeem(&cmd.user_id, now)?;

        let inviter_id = invite.inviter().clone();
        let mut inviter = self
            .profiles
            .find_by_user(&inviter_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ProfileNotFound, "Inviter profile not found")
            })?;
        let mut redeemer = self
            .profiles
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;

        if inviter.has_partner() || redeemer.has_partner() {
            return Err(DomainError::new(
                ErrorCode::AlreadyLinked,
                "One of the profiles is already linked",
            ));
        }

        let link = CoupleLink::new(inviter_id.clone(), cmd.user_id.clone())?;
        inviter.link_partner(cmd.user_id.clone(), link.id())?;
        redeemer.link_partner(inviter_id, link.id())?;

        self.couples.update_invite(&invite).await?;
        self.couples.create_link(&link).await?;
        self.profiles.update(&inviter).await?;
        self.profiles.update(&redeemer).await?;

        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{InMemoryCouples, InMemoryProfiles};
    use crate::domain::couple::PartnerInvite;
    use crate::domain::user::UserProfile;
    use crate::ports::ProfileRepository as _;

    fn user(n: &str) -> UserId {
        UserId::new(n).unwrap()
    }

    async fn fixture() -> (Arc<InMemoryProfiles>, Arc<InMemoryCouples>, String) {
        let profiles = Arc::new(InMemoryProfiles::default());
        profiles
            .create(&UserProfile::new(user("inviter"), "i@x.c", "I").unwrap())
            .await
            .unwrap();
        profiles
            .create(&UserProfile::new(user("redeemer"), "r@x.c", "R").unwrap())
            .await
            .unwrap();

        let invite = PartnerInvite::new(user("inviter"), Timestamp::now());
        let code = invite.code().to_string();
        let couples = Arc::new(InMemoryCouples::with_invite(invite));
        (profiles, couples, code)
    }

    #[tokio::test]
    async fn redemption_links_both_profiles() {
        let (profiles, couples, code) = fixture().await;
        let handler = AcceptInviteHandler::new(profiles.clone(), couples);

        let link = handler
            .handle(AcceptInviteCommand {
                user_id: user("redeemer"),
                code,
            })
            .await
            .unwrap();

        let inviter = profiles.find_by_user(&user("inviter")).await.unwrap().unwrap();
        let redeemer = profiles
            .find_by_user(&user("redeemer"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(inviter.partner_id(), Some(&user("redeemer")));
        assert_eq!(redeemer.partner_id(), Some(&user("inviter")));
        assert_eq!(inviter.couple_id(), Some(link.id()));
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let (profiles, couples, _) = fixture().await;
        let handler = AcceptInviteHandler::new(profiles, couples);

        let err = handler
            .handle(AcceptInviteCommand {
                user_id: user("redeemer"),
                code: "ZZZZZZZZ".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InviteNotFound);
    }

    #[tokio::test]
    async fn code_is_case_insensitive() {
        let (profiles, couples, code) = fixture().await;
        let handler = AcceptInviteHandler::new(profiles, couples);

        let result = handler
            .handle(AcceptInviteCommand {
                user_id: user("redeemer"),
                code: code.to_lowercase(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn second_redemption_conflicts() {
        let (profiles, couples, code) = fixture().await;
        profiles
            .create(&UserProfile::new(user("third"), "t@x.c", "T").unwrap())
            .await
            .unwrap();
        let handler = AcceptInviteHandler::new(profiles, couples);

        handler
            .handle(AcceptInviteCommand {
                user_id: user("redeemer"),
                code: code.clone(),
            })
            .await
            .unwrap();

        let err = handler
            .handle(AcceptInviteCommand {
                user_id: user("third"),
                code,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Conflict);
    }
}
