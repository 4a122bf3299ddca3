//! CheckAccess - The access gate over loaded profile and subscription
//! state.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::subscription::{evaluate_access, AccessInputs, AccessStatus};
use crate::domain::user::UserProfile;
use crate::ports::{CoupleRepository, ProfileRepository, SubscriptionRepository};

/// Evaluates whether a user currently has access.
///
/// Shared by the subscription status endpoint and every gated handler.
pub struct AccessGate {
    profiles: Arc<dyn ProfileRepository>,
    couples: Arc<dyn CoupleRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl AccessGate {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        couples: Arc<dyn CoupleRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            profiles,
            couples,
            subscriptions,
        }
    }

    /// Computes the access status for a user at `now`.
    ///
    /// A user with no profile simply has no access; that is not an
    /// error.
    pub async fn evaluate(&self, user_id: &UserId, now: Timestamp) -> Result<AccessStatus, DomainError> {
        let profile = self.profiles.find_by_user(user_id).await?;
        let own = self.inputs_for(user_id, profile.as_ref()).await?;

        // Partner sharing only applies when a link exists and the
        // partner has turned sharing on.
        let partner = match self.couples.find_link_for_user(user_id).await? {
            Some(link) => match link.partner_of(user_id) {
                Some(partner_id) if link.partner_shares_access_with(user_id) => {
                    let partner_profile = self.profiles.find_by_user(partner_id).await?;
                    let inputs = self
                        .inputs_for(partner_id, partner_profile.as_ref())
                        .await?;
                    Some((inputs, true))
                }
                _ => None,
            },
            None => None,
        };

        Ok(evaluate_access(now, own, partner))
    }

    async fn inputs_for(
        &self,
        user_id: &UserId,
        profile: Option<&UserProfile>,
    ) -> Result<AccessInputs, DomainError> {
        let subscription = self.subscriptions.find_by_user(user_id).await?;
        Ok(AccessInputs {
            trial_ends_at: profile.and_then(|p| p.trial_ends_at()),
            subscription_ends_at: subscription.and_then(|s| s.paid_window_end()),
        })
    }
}

/// Query for the current access status.
#[derive(Debug, Clone)]
pub struct CheckAccessQuery {
    pub user_id: UserId,
}

/// Handler wrapping the gate for the status endpoint.
pub struct CheckAccessHandler {
    gate: Arc<AccessGate>,
}

impl CheckAccessHandler {
    pub fn new(gate: Arc<AccessGate>) -> Self {
        Self { gate }
    }

    pub async fn handle(&self, query: CheckAccessQuery) -> Result<AccessStatus, DomainError> {
        self.gate.evaluate(&query.user_id, Timestamp::now()).await
    }
}
