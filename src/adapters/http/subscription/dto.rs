//! Request/response DTOs for subscription endpoints.

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::subscription::{AccessSource, AccessStatus};

#[derive(Debug, Serialize)]
pub struct AccessStatusResponse {
    pub active: bool,
    pub source: AccessSource,
    pub trial_ends_at: Option<Timestamp>,
    pub subscription_ends_at: Option<Timestamp>,
}

impl From<AccessStatus> for AccessStatusResponse {
    fn from(status: AccessStatus) -> Self {
        Self {
            active: status.active,
            source: status.source,
            trial_ends_at: status.trial_ends_at,
            subscription_ends_at: status.subscription_ends_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrialStartedResponse {
    pub trial_started_at: Timestamp,
    pub trial_ends_at: Timestamp,
}
