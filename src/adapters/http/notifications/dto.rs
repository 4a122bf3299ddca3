//! Request/response DTOs for notification endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::notification::NotificationPreferences;

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub daily_spark: bool,
    pub partner_activity: bool,
    pub trial_reminders: bool,
    pub tips: bool,
}

impl From<UpdatePreferencesRequest> for NotificationPreferences {
    fn from(req: UpdatePreferencesRequest) -> Self {
        Self {
            daily_spark: req.daily_spark,
            partner_activity: req.partner_activity,
            trial_reminders: req.trial_reminders,
            tips: req.tips,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterDeviceRequest {
    pub token: String,
    pub platform: String,
}

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub daily_spark: bool,
    pub partner_activity: bool,
    pub trial_reminders: bool,
    pub tips: bool,
}

impl From<NotificationPreferences> for PreferencesResponse {
    fn from(prefs: NotificationPreferences) -> Self {
        Self {
            daily_spark: prefs.daily_spark,
            partner_activity: prefs.partner_activity,
            trial_reminders: prefs.trial_reminders,
            tips: prefs.tips,
        }
    }
}
