//! ApplyBillingEvent - Command handler for verified billing webhooks.
//!
//! Events are applied idempotently: a redelivered event id is
//! acknowledged without changing state.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::subscription::{BillingEvent, BillingEventType, SubscriptionRecord};
use crate::ports::SubscriptionRepository;

/// Handler for applying billing events to subscription records.
pub struct ApplyBillingEventHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl ApplyBillingEventHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    pub async fn handle(&self, event: BillingEvent) -> Result<(), DomainError> {
        if self
            .subscriptions
            .has_processed_event(&event.event_id)
            .await?
        {
            tracing::debug!(event = %event.event_id, "billing event already processed");
            return Ok(());
        }

        let user_id = UserId::new(event.user_id.clone())?;
        let existing = self.subscriptions.find_by_user(&user_id).await?;

        let record = match (event.event_type, existing) {
            (BillingEventType::SubscriptionActivated, _) => SubscriptionRecord::new(
                user_id,
                event.plan.clone(),
                event.current_period_end,
                event.external_ref.clone(),
            ),
            (BillingEventType::SubscriptionRenewed, Some(mut record)) => {
                record.renew(event.current_period_end);
                record
            }
            // A renewal for an unknown subscription behaves like an
            // activation; providers replay history out of order.
            (BillingEventType::SubscriptionRenewed, None) => SubscriptionRecord::new(
                user_id,
                event.plan.clone(),
                event.current_period_end,
                event.external_ref.clone(),
            ),
            (BillingEventType::PaymentFailed, Some(mut record)) => {
                record.mark_past_due();
                record
            }
            (BillingEventType::SubscriptionCancelled, Some(mut record)) => {
                record.cancel();
                record
            }
            (BillingEventType::SubscriptionExpired, Some(mut record)) => {
                record.expire();
                record
            }
            // Terminal events with no record to act on are acknowledged.
            (_, None) => {
                self.subscriptions
                    .mark_event_processed(&event.event_id)
                    .await?;
                return Ok(());
            }
        };

        self.subscriptions.upsert(&record).await?;
        self.subscriptions
            .mark_event_processed(&event.event_id)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemorySubscriptions;
    use crate::domain::foundation::Timestamp;
    use crate::domain::subscription::SubscriptionStatus;
    use crate::ports::SubscriptionRepository as _;

    fn event(event_id: &str, event_type: BillingEventType) -> BillingEvent {
        BillingEvent {
            event_id: event_id.to_string(),
            event_type,
            user_id: "u1".to_string(),
            plan: "monthly".to_string(),
            current_period_end: Timestamp::from_unix_secs(2_000_000_000),
            external_ref: Some("sub_1".to_string()),
        }
    }

    #[tokio::test]
    async fn activation_creates_record() {
        let subs = Arc::new(InMemorySubscriptions::default());
        let handler = ApplyBillingEventHandler::new(subs.clone());

        handler
            .handle(event("evt_1", BillingEventType::SubscriptionActivated))
            .await
            .unwrap();

        let record = subs
            .find_by_user(&UserId::new("u1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.status(), SubscriptionStatus::Active);
    }

    #[tokio::test]
    async fn redelivery_is_idempotent() {
        let subs = Arc::new(InMemorySubscriptions::default());
        let handler = ApplyBillingEventHandler::new(subs.clone());

        handler
            .handle(event("evt_1", BillingEventType::SubscriptionActivated))
            .await
            .unwrap();
        // Same event id again, now claiming cancellation: must be ignored.
        handler
            .handle(event("evt_1", BillingEventType::SubscriptionCancelled))
            .await
            .unwrap();

        let record = subs
            .find_by_user(&UserId::new("u1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.status(), SubscriptionStatus::Active);
    }

    #[tokio::test]
    async fn lifecycle_events_update_status() {
        let subs = Arc::new(InMemorySubscriptions::default());
        let handler = ApplyBillingEventHandler::new(subs.clone());
        let user = UserId::new("u1").unwrap();

        handler
            .handle(event("evt_1", BillingEventType::SubscriptionActivated))
            .await
            .unwrap();
        handler
            .handle(event("evt_2", BillingEventType::PaymentFailed))
            .await
            .unwrap();
        assert_eq!(
            subs.find_by_user(&user).await.unwrap().unwrap().status(),
            SubscriptionStatus::PastDue
        );

        handler
            .handle(event("evt_3", BillingEventType::SubscriptionExpired))
            .await
            .unwrap();
        assert_eq!(
            subs.find_by_user(&user).await.unwrap().unwrap().status(),
            SubscriptionStatus::Expired
        );
    }

    #[tokio::test]
    async fn expiry_without_record_is_acknowledged() {
        let subs = Arc::new(InMemorySubscriptions::default());
        let handler = ApplyBillingEventHandler::new(subs.clone());

        handler
            .handle(event("evt_9", BillingEventType::SubscriptionExpired))
            .await
            .unwrap();
        assert!(subs.has_processed_event("evt_9").await.unwrap());
    }
}
