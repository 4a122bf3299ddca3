//! The access gate: trial, paid, and partner-shared access.
//!
//! Pure date/boolean logic over already-loaded state. Boundary instants
//! are inclusive: access holds while `now <= ends_at`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// The dates that determine one user's own access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessInputs {
    pub trial_ends_at: Option<Timestamp>,
    pub subscription_ends_at: Option<Timestamp>,
}

impl AccessInputs {
    /// True when the user has access in their own right (trial or paid),
    /// ignoring any partner sharing.
    pub fn has_direct_access(&self, now: Timestamp) -> bool {
        let in_window = |end: &Option<Timestamp>| end.map(|e| now <= e).unwrap_or(false);
        in_window(&self.trial_ends_at) || in_window(&self.subscription_ends_at)
    }
}

/// Where a user's access comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessSource {
    Trial,
    Subscription,
    Partner,
    None,
}

/// The result of evaluating the gate for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessStatus {
    pub active: bool,
    pub source: AccessSource,
    pub trial_ends_at: Option<Timestamp>,
    pub subscription_ends_at: Option<Timestamp>,
}

/// Evaluates access for a user.
///
/// `partner` carries the partner's own access inputs plus whether that
/// partner has explicitly shared access with this user. Callers pass
/// `None` when the user has no partner, which makes shared access
/// impossible by construction.
pub fn evaluate_access(
    now: Timestamp,
    own: AccessInputs,
    partner: Option<(AccessInputs, bool)>,
) -> AccessStatus {
    let source = if own
        .subscription_ends_at
        .map(|e| now <= e)
        .unwrap_or(false)
    {
        AccessSource::Subscription
    } else if own.trial_ends_at.map(|e| now <= e).unwrap_or(false) {
        AccessSource::Trial
    } else if partner
        .map(|(inputs, shares)| shares && inputs.has_direct_access(now))
        .unwrap_or(false)
    {
        AccessSource::Partner
    } else {
        AccessSource::None
    };

    AccessStatus {
        active: source != AccessSource::None,
        source,
        trial_ends_at: own.trial_ends_at,
        subscription_ends_at: own.subscription_ends_at,
    }
}
