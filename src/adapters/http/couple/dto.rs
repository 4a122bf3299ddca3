//! Request/response DTOs for couple endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::couple::{CoupleLink, PartnerInvite};
use crate::domain::foundation::Timestamp;
use crate::domain::suggestion::Intensity;

#[derive(Debug, Deserialize)]
pub struct AcceptInviteRequest {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSharedPreferencesRequest {
    pub default_intensity: Option<Intensity>,
    pub share_access: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct InviteResponse {
    pub code: String,
    pub expires_at: Timestamp,
}

impl From<PartnerInvite> for InviteResponse {
    fn from(invite: PartnerInvite) -> Self {
        Self {
            code: invite.code().to_string(),
            expires_at: invite.expires_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CoupleResponse {
    pub couple_id: String,
    pub partner_a: String,
    pub partner_b: String,
    pub default_intensity: Intensity,
    pub a_shares_access: bool,
    pub b_shares_access: bool,
    pub created_at: Timestamp,
}

impl From<CoupleLink> for CoupleResponse {
    fn from(link: CoupleLink) -> Self {
        Self {
            couple_id: link.id().to_string(),
            partner_a: link.user_a().to_string(),
            partner_b: link.user_b().to_string(),
            default_intensity: link.shared().default_intensity,
            a_shares_access: link.shared().a_shares_access,
            b_shares_access: link.shared().b_shares_access,
            created_at: link.created_at(),
        }
    }
}
