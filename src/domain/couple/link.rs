//! CoupleLink aggregate and partner invites.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CoupleId, DomainError, ErrorCode, InviteId, Timestamp, UserId, ValidationError,
};
use crate::domain::suggestion::Intensity;

/// How long an invite code stays redeemable.
pub const INVITE_TTL_HOURS: i64 = 48;

/// Preference fields shared by both partners of a couple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedPreferences {
    /// Default heat level for generated content.
    pub default_intensity: Intensity,
    /// Whether user A shares subscription access with user B.
    pub a_shares_access: bool,
    /// Whether user B shares subscription access with user A.
    pub b_shares_access: bool,
}

impl Default for SharedPreferences {
    fn default() -> Self {
        Self {
            default_intensity: Intensity::Flirty,
            a_shares_access: false,
            b_shares_access: false,
        }
    }
}

/// Bidirectional association between two user profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoupleLink {
    id: CoupleId,
    user_a: UserId,
    user_b: UserId,
    shared: SharedPreferences,
    created_at: Timestamp,
}

impl CoupleLink {
    /// Creates a link between two distinct users.
    pub fn new(user_a: UserId, user_b: UserId) -> Result<Self, DomainError> {
        if user_a == user_b {
            return Err(DomainError::validation(
                "user_b",
                "A couple requires two distinct users",
            ));
        }
        Ok(Self {
            id: CoupleId::new(),
            user_a,
            user_b,
            shared: SharedPreferences::default(),
            created_at: Timestamp::now(),
        })
    }

    /// Reconstructs a link from persisted state.
    pub fn restore(
        id: CoupleId,
        user_a: UserId,
        user_b: UserId,
        shared: SharedPreferences,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_a,
            user_b,
            shared,
            created_at,
        }
    }

    pub fn id(&self) -> CoupleId {
        self.id
    }

    pub fn user_a(&self) -> &UserId {
        &self.user_a
    }

    pub fn user_b(&self) -> &UserId {
        &self.user_b
    }

    pub fn shared(&self) -> &SharedPreferences {
        &self.shared
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// True if the given user is one of the two partners.
    pub fn includes(&self, user: &UserId) -> bool {
        &self.user_a == user || &self.user_b == user
    }

    /// Returns the other partner, or None if the user is not in this couple.
    pub fn partner_of(&self, user: &UserId) -> Option<&UserId> {
        if &self.user_a == user {
            Some(&self.user_b)
        } else if &self.user_b == user {
            Some(&self.user_a)
        } else {
            None
        }
    }

    /// True if the given user's partner has explicitly shared their
    /// subscription access with them.
    pub fn partner_shares_access_with(&self, user: &UserId) -> bool {
        if &self.user_a == user {
            self.shared.b_shares_access
        } else if &self.user_b == user {
            self.shared.a_shares_access
        } else {
            false
        }
    }

    /// Sets whether `user` shares their access with their partner.
    pub fn set_access_sharing(&mut self, user: &UserId, shares: bool) -> Result<(), DomainError> {
        if &self.user_a == user {
            self.shared.a_shares_access = shares;
            Ok(())
        } else if &self.user_b == user {
            self.shared.b_shares_access = shares;
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User is not part of this couple",
            ))
        }
    }

    /// Sets the couple's default heat level.
    pub fn set_default_intensity(&mut self, intensity: Intensity) {
        self.shared.default_intensity = intensity;
    }
}

/// A single-use partner invite code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerInvite {
    id: InviteId,
    code: String,
    inviter: UserId,
    created_at: Timestamp,
    expires_at: Timestamp,
    redeemed: bool,
}

impl PartnerInvite {
    /// Creates a new invite for the given user.
    ///
    /// The code is short enough to read over a shoulder: the first two
    /// UUID groups, uppercased.
    pub fn new(inviter: UserId, now: Timestamp) -> Self {
        let id = InviteId::new();
        let raw = id.as_uuid().simple().to_string();
        let code = raw[..8].to_uppercase();
        Self {
            id,
            code,
            inviter,
            created_at: now,
            expires_at: now.plus_secs((INVITE_TTL_HOURS * 3600) as u64),
            redeemed: false,
        }
    }

    /// Reconstructs an invite from persisted state.
    pub fn restore(
        id: InviteId,
        code: String,
        inviter: UserId,
        created_at: Timestamp,
        expires_at: Timestamp,
        redeemed: bool,
    ) -> Self {
        Self {
            id,
            code,
            inviter,
            created_at,
            expires_at,
            redeemed,
        }
    }

    pub fn id(&self) -> InviteId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn inviter(&self) -> &UserId {
        &self.inviter
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    pub fn is_redeemed(&self) -> bool {
        self.redeemed
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        now.is_after(&self.expires_at)
    }

    /// Marks the invite redeemed by the given user.
    pub fn redeem(&mut self, redeemer: &UserId, now: Timestamp) -> Result<(), DomainError> {
        if self.redeemed {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                "Invite has already been redeemed",
            ));
        }
        if self.is_expired(now) {
            return Err(DomainError::new(
                ErrorCode::InviteExpired,
                "Invite has expired",
            ));
        }
        if redeemer == &self.inviter {
            return Err(DomainError::validation(
                "code",
                "Cannot redeem your own invite",
            ));
        }
        self.redeemed = true;
        Ok(())
    }
}

/// Validates an invite code's shape before hitting storage.
pub fn validate_invite_code(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() {
        return Err(ValidationError::empty_field("code"));
    }
    if code.len() != 8 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::invalid_format(
            "code",
            "expected 8 alphanumeric characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(n: &str) -> UserId {
        UserId::new(n).unwrap()
    }

    #[test]
    fn couple_requires_distinct_users() {
        assert!(CoupleLink::new(user("a"), user("a")).is_err());
    }

    #[test]
    fn partner_of_is_symmetric() {
        let link = CoupleLink::new(user("a"), user("b")).unwrap();
        assert_eq!(link.partner_of(&user("a")), Some(&user("b")));
        assert_eq!(link.partner_of(&user("b")), Some(&user("a")));
        assert_eq!(link.partner_of(&user("c")), None);
    }

    #[test]
    fn access_sharing_is_directional() {
        let mut link = CoupleLink::new(user("a"), user("b")).unwrap();
        link.set_access_sharing(&user("a"), true).unwrap();

        // A shares with B, so B benefits; A does not.
        assert!(link.partner_shares_access_with(&user("b")));
        assert!(!link.partner_shares_access_with(&user("a")));
    }

    #[test]
    fn outsiders_cannot_set_sharing() {
        let mut link = CoupleLink::new(user("a"), user("b")).unwrap();
        assert!(link.set_access_sharing(&user("c"), true).is_err());
    }

    #[test]
    fn invite_code_is_eight_alphanumerics() {
        let invite = PartnerInvite::new(user("a"), Timestamp::now());
        assert!(validate_invite_code(invite.code()).is_ok());
    }

    #[test]
    fn invite_redeems_once() {
        let now = Timestamp::now();
        let mut invite = PartnerInvite::new(user("a"), now);

        invite.redeem(&user("b"), now).unwrap();
        let err = invite.redeem(&user("c"), now).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[test]
    fn expired_invite_cannot_be_redeemed() {
        let created = Timestamp::from_unix_secs(1_700_000_000);
        let mut invite = PartnerInvite::new(user("a"), created);
        let later = created.plus_secs((INVITE_TTL_HOURS * 3600) as u64 + 1);

        let err = invite.redeem(&user("b"), later).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InviteExpired);
    }

    #[test]
    fn inviter_cannot_redeem_own_invite() {
        let now = Timestamp::now();
        let mut invite = PartnerInvite::new(user("a"), now);
        assert!(invite.redeem(&user("a"), now).is_err());
    }

    #[test]
    fn code_validation_rejects_bad_shapes() {
        assert!(validate_invite_code("").is_err());
        assert!(validate_invite_code("abc").is_err());
        assert!(validate_invite_code("12345!78").is_err());
        assert!(validate_invite_code("AB12CD34").is_ok());
    }
}
