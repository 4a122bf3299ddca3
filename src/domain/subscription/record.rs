//! Subscription records updated by billing events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};

/// Subscription lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Paid subscription in good standing.
    Active,
    /// Payment failed but within the provider's grace period.
    PastDue,
    /// User cancelled; access continues until period end.
    Cancelled,
    /// Period ended with no renewal. No access.
    Expired,
}

impl SubscriptionStatus {
    /// Whether this status keeps the paid window open.
    ///
    /// PastDue and Cancelled retain access until the period end passes;
    /// the date comparison is the gate's job.
    pub fn keeps_window_open(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::Active | SubscriptionStatus::PastDue | SubscriptionStatus::Cancelled
        )
    }
}

/// One user's paid subscription as reported by the billing provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    id: SubscriptionId,
    user_id: UserId,
    plan: String,
    status: SubscriptionStatus,
    current_period_end: Timestamp,
    external_ref: Option<String>,
    updated_at: Timestamp,
}

impl SubscriptionRecord {
    /// Creates a record from a provider activation.
    pub fn new(
        user_id: UserId,
        plan: impl Into<String>,
        current_period_end: Timestamp,
        external_ref: Option<String>,
    ) -> Self {
        Self {
            id: SubscriptionId::new(),
            user_id,
            plan: plan.into(),
            status: SubscriptionStatus::Active,
            current_period_end,
            external_ref,
            updated_at: Timestamp::now(),
        }
    }

    /// Reconstructs a record from persisted state.
    pub fn restore(
        id: SubscriptionId,
        user_id: UserId,
        plan: String,
        status: SubscriptionStatus,
        current_period_end: Timestamp,
        external_ref: Option<String>,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            plan,
            status,
            current_period_end,
            external_ref,
            updated_at,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    pub fn current_period_end(&self) -> Timestamp {
        self.current_period_end
    }

    pub fn external_ref(&self) -> Option<&str> {
        self.external_ref.as_deref()
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The end of the paid window for the access gate, or None when the
    /// status has closed it.
    pub fn paid_window_end(&self) -> Option<Timestamp> {
        self.status
            .keeps_window_open()
            .then_some(self.current_period_end)
    }

    /// Applies a renewal: back to Active with a new period end.
    pub fn renew(&mut self, period_end: Timestamp) {
        self.status = SubscriptionStatus::Active;
        self.current_period_end = period_end;
        self.updated_at = Timestamp::now();
    }

    /// Marks a failed payment.
    pub fn mark_past_due(&mut self) {
        self.status = SubscriptionStatus::PastDue;
        self.updated_at = Timestamp::now();
    }

    /// Marks a user-requested cancellation.
    pub fn cancel(&mut self) {
        self.status = SubscriptionStatus::Cancelled;
        self.updated_at = Timestamp::now();
    }

    /// Marks the subscription fully ended.
    pub fn expire(&mut self) {
        self.status = SubscriptionStatus::Expired;
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SubscriptionRecord {
        SubscriptionRecord::new(
            UserId::new("u1").unwrap(),
            "monthly",
            Timestamp::from_unix_secs(2_000_000_000),
            Some("sub_123".to_string()),
        )
    }

    #[test]
    fn new_record_is_active() {
        let r = record();
        assert_eq!(r.status(), SubscriptionStatus::Active);
        assert!(r.paid_window_end().is_some());
    }

    #[test]
    fn past_due_keeps_window_open() {
        let mut r = record();
        r.mark_past_due();
        assert!(r.paid_window_end().is_some());
    }

    #[test]
    fn cancelled_keeps_window_until_period_end() {
        let mut r = record();
        r.cancel();
        assert_eq!(r.paid_window_end(), Some(r.current_period_end()));
    }

    #[test]
    fn expired_closes_window() {
        let mut r = record();
        r.expire();
        assert_eq!(r.paid_window_end(), None);
    }

    #[test]
    fn renew_reopens_window() {
        let mut r = record();
        r.expire();
        let new_end = Timestamp::from_unix_secs(2_100_000_000);
        r.renew(new_end);
        assert_eq!(r.paid_window_end(), Some(new_end));
    }
}
