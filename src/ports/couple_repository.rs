//! Couple repository port - Links and partner invites.

use async_trait::async_trait;

use crate::domain::couple::{CoupleLink, PartnerInvite};
use crate::domain::foundation::{CoupleId, DomainError, UserId};

/// Port for persisting couple links and invites.
#[async_trait]
pub trait CoupleRepository: Send + Sync {
    /// Stores a new invite.
    async fn create_invite(&self, invite: &PartnerInvite) -> Result<(), DomainError>;

    /// Finds an invite by its code.
    async fn find_invite_by_code(&self, code: &str)
        -> Result<Option<PartnerInvite>, DomainError>;

    /// Replaces an existing invite (e.g. after redemption).
    async fn update_invite(&self, invite: &PartnerInvite) -> Result<(), DomainError>;

    /// Stores a new couple link.
    async fn create_link(&self, link: &CoupleLink) -> Result<(), DomainError>;

    /// Finds the link a user belongs to, if any.
    async fn find_link_for_user(&self, user_id: &UserId)
        -> Result<Option<CoupleLink>, DomainError>;

    /// Replaces an existing link (shared preference changes).
    async fn update_link(&self, link: &CoupleLink) -> Result<(), DomainError>;

    /// Removes a link. Missing links are not an error.
    async fn delete_link(&self, couple_id: CoupleId) -> Result<(), DomainError>;
}
