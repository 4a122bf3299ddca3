//! Notification module - Preference toggles and device tokens.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// The fixed set of boolean toggles gating notification categories.
/// Delivery itself is delegated to the hosted messaging service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// The daily suggestion nudge.
    pub daily_spark: bool,
    /// Partner sent a thought bubble or completed the quiz.
    pub partner_activity: bool,
    /// Trial expiry reminders.
    pub trial_reminders: bool,
    /// Occasional tips and feature announcements.
    pub tips: bool,
}

impl Default for NotificationPreferences {
    /// Transactional categories default on; promotional off.
    fn default() -> Self {
        Self {
            daily_spark: true,
            partner_activity: true,
            trial_reminders: true,
            tips: false,
        }
    }
}

impl NotificationPreferences {
    /// True if every category is off.
    pub fn all_muted(&self) -> bool {
        !self.daily_spark && !self.partner_activity && !self.trial_reminders && !self.tips
    }
}

/// A registered push token for one of the user's devices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceToken {
    pub user_id: UserId,
    pub token: String,
    /// Platform label as reported by the client, e.g. "ios" or "web".
    pub platform: String,
    pub registered_at: Timestamp,
}

impl DeviceToken {
    pub fn new(
        user_id: UserId,
        token: impl Into<String>,
        platform: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ValidationError::empty_field("token"));
        }
        Ok(Self {
            user_id,
            token,
            platform: platform.into(),
            registered_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_transactional_on_and_promotional_off() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.daily_spark);
        assert!(prefs.partner_activity);
        assert!(prefs.trial_reminders);
        assert!(!prefs.tips);
    }

    #[test]
    fn all_muted_detects_silence() {
        let muted = NotificationPreferences {
            daily_spark: false,
            partner_activity: false,
            trial_reminders: false,
            tips: false,
        };
        assert!(muted.all_muted());
        assert!(!NotificationPreferences::default().all_muted());
    }

    #[test]
    fn device_token_requires_content() {
        assert!(DeviceToken::new(UserId::new("u").unwrap(), " ", "ios").is_err());
    }
}
