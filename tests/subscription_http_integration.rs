//! Integration tests for the subscription HTTP surface.
//!
//! Exercises the real router: auth middleware, the trial endpoint, the
//! access-status endpoint, and the HMAC-verified billing webhook.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use duet::adapters::auth::MockVerifier;
use duet::adapters::http::middleware::{auth_middleware, AuthState};
use duet::adapters::http::subscription::{
    billing_routes, subscription_routes, SubscriptionHandlers,
};
use duet::application::handlers::subscription::{
    AccessGate, ApplyBillingEventHandler, CheckAccessHandler, StartTrialHandler,
};
use duet::domain::couple::{CoupleLink, PartnerInvite};
use duet::domain::foundation::{CoupleId, DomainError, Timestamp, UserId};
use duet::domain::subscription::{SubscriptionRecord, WebhookVerifier};
use duet::domain::user::UserProfile;
use duet::ports::{CoupleRepository, ProfileRepository, SubscriptionRepository};

// =============================================================================
// Test infrastructure
// =============================================================================

#[derive(Default)]
struct MockProfiles {
    profiles: Mutex<Vec<UserProfile>>,
}

#[async_trait]
impl ProfileRepository for MockProfiles {
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(slot) = profiles
            .iter_mut()
            .find(|p| p.user_id() == profile.user_id())
        {
            *slot = profile.clone();
            Ok(())
        } else {
            Err(DomainError::not_found("Profile"))
        }
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id() == user_id)
            .cloned())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.profiles
            .lock()
            .unwrap()
            .retain(|p| p.user_id() != user_id);
        Ok(())
    }
}

#[derive(Default)]
struct MockCouples;

#[async_trait]
impl CoupleRepository for MockCouples {
    async fn create_invite(&self, _invite: &PartnerInvite) -> Result<(), DomainError> {
        unimplemented!()
    }

    async fn find_invite_by_code(
        &self,
        _code: &str,
    ) -> Result<Option<PartnerInvite>, DomainError> {
        Ok(None)
    }

    async fn update_invite(&self, _invite: &PartnerInvite) -> Result<(), DomainError> {
        unimplemented!()
    }

    async fn create_link(&self, _link: &CoupleLink) -> Result<(), DomainError> {
        unimplemented!()
    }

    async fn find_link_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<CoupleLink>, DomainError> {
        Ok(None)
    }

    async fn update_link(&self, _link: &CoupleLink) -> Result<(), DomainError> {
        unimplemented!()
    }

    async fn delete_link(&self, _couple_id: CoupleId) -> Result<(), DomainError> {
        Ok(())
    }
}

#[derive(Default)]
struct MockSubscriptions {
    records: Mutex<Vec<SubscriptionRecord>>,
    processed: Mutex<Vec<String>>,
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptions {
    async fn upsert(&self, record: &SubscriptionRecord) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        records.retain(|r| r.user_id() != record.user_id());
        records.push(record.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SubscriptionRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id() == user_id)
            .cloned())
    }

    async fn has_processed_event(&self, event_id: &str) -> Result<bool, DomainError> {
        Ok(self
            .processed
            .lock()
            .unwrap()
            .iter()
            .any(|id| id == event_id))
    }

    async fn mark_event_processed(&self, event_id: &str) -> Result<(), DomainError> {
        self.processed.lock().unwrap().push(event_id.to_string());
        Ok(())
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.user_id() != user_id);
        Ok(())
    }
}

const WEBHOOK_SECRET: &str = "whsec_integration";

fn app_with_profile(profile: Option<UserProfile>) -> axum::Router {
    let profiles = Arc::new(MockProfiles::default());
    if let Some(profile) = profile {
        profiles.profiles.lock().unwrap().push(profile);
    }
    let couples = Arc::new(MockCouples);
    let subscriptions = Arc::new(MockSubscriptions::default());

    let gate = Arc::new(AccessGate::new(
        profiles.clone(),
        couples,
        subscriptions.clone(),
    ));
    let handlers = SubscriptionHandlers {
        check_access: Arc::new(CheckAccessHandler::new(gate)),
        start_trial: Arc::new(StartTrialHandler::new(profiles)),
        apply_event: Arc::new(ApplyBillingEventHandler::new(subscriptions)),
        verifier: Arc::new(WebhookVerifier::new(WEBHOOK_SECRET)),
    };

    let verifier: AuthState = Arc::new(MockVerifier);
    axum::Router::new()
        .nest("/api/subscription", subscription_routes(handlers.clone()))
        .nest("/api/billing", billing_routes(handlers))
        .layer(axum::middleware::from_fn_with_state(
            verifier,
            auth_middleware,
        ))
}

fn ada() -> UserProfile {
    UserProfile::new(UserId::new("ada").unwrap(), "ada@example.com", "Ada").unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn status_requires_authentication() {
    let response = app_with_profile(Some(ada()))
        .oneshot(
            Request::builder()
                .uri("/api/subscription")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn fresh_account_has_no_access() {
    let response = app_with_profile(Some(ada()))
        .oneshot(
            Request::builder()
                .uri("/api/subscription")
                .header("Authorization", "Bearer user:ada")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["active"], false);
    assert_eq!(json["source"], "none");
}

#[tokio::test]
async fn trial_then_status_reports_trial_access() {
    let app = app_with_profile(Some(ada()));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/subscription/trial")
                .header("Authorization", "Bearer user:ada")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/subscription")
                .header("Authorization", "Bearer user:ada")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["active"], true);
    assert_eq!(json["source"], "trial");
}

#[tokio::test]
async fn second_trial_conflicts() {
    let app = app_with_profile(Some(ada()));

    for expected in [StatusCode::OK, StatusCode::CONFLICT] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/subscription/trial")
                    .header("Authorization", "Bearer user:ada")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn signed_webhook_activates_subscription() {
    let app = app_with_profile(Some(ada()));

    let payload = serde_json::json!({
        "id": "evt_1",
        "type": "subscription.activated",
        "user_id": "ada",
        "plan": "annual",
        "current_period_end": 4_000_000_000u64,
        "subscription_ref": "sub_42"
    })
    .to_string();
    let signature = WebhookVerifier::new(WEBHOOK_SECRET)
        .sign(payload.as_bytes(), Timestamp::now().as_unix_secs() as i64);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/billing/webhook")
                .header("Billing-Signature", signature)
                .header("Content-Type", "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/subscription")
                .header("Authorization", "Bearer user:ada")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["active"], true);
    assert_eq!(json["source"], "subscription");
}

#[tokio::test]
async fn unsigned_webhook_is_rejected() {
    let response = app_with_profile(None)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/billing/webhook")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn badly_signed_webhook_is_rejected() {
    let payload = r#"{"id":"evt_2","type":"subscription.activated","user_id":"ada"}"#;
    let signature = WebhookVerifier::new("whsec_wrong")
        .sign(payload.as_bytes(), Timestamp::now().as_unix_secs() as i64);

    let response = app_with_profile(None)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/billing/webhook")
                .header("Billing-Signature", signature)
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
