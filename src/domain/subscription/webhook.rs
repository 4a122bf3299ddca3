//! Billing webhook verification and event parsing.
//!
//! The billing provider signs each delivery with HMAC-SHA256 over
//! `"{timestamp}.{payload}"` and sends the result in a
//! `t=<ts>,v1=<hex>` signature header. Verification uses constant-time
//! comparison and rejects deliveries outside the replay window.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::domain::foundation::Timestamp;

/// Maximum allowed age for webhook deliveries (5 minutes).
const MAX_EVENT_AGE_SECS: i64 = 300;

/// Maximum allowed clock skew for future-dated deliveries (1 minute).
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Webhook processing errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebhookError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("delivery timestamp outside replay window")]
    TimestampOutOfRange,

    #[error("malformed webhook: {0}")]
    ParseError(String),

    #[error("unsupported event type: {0}")]
    UnsupportedEvent(String),
}

/// Parsed components of the signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when the signature was generated.
    pub timestamp: i64,
    /// v1 signature (HMAC-SHA256).
    pub v1_signature: Vec<u8>,
}

impl SignatureHeader {
    /// Parses a `t=<timestamp>,v1=<hex>` header.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let mut timestamp: Option<i64> = None;
        let mut v1_signature: Option<Vec<u8>> = None;

        for part in header.split(',') {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| WebhookError::ParseError("invalid header format".to_string()))?;

            match key.trim() {
                "t" => {
                    timestamp = Some(value.parse().map_err(|_| {
                        WebhookError::ParseError("invalid timestamp".to_string())
                    })?);
                }
                "v1" => {
                    v1_signature = Some(hex::decode(value).map_err(|_| {
                        WebhookError::ParseError("invalid v1 signature hex".to_string())
                    })?);
                }
                // Unknown fields are ignored for forward compatibility.
                _ => {}
            }
        }

        Ok(SignatureHeader {
            timestamp: timestamp
                .ok_or_else(|| WebhookError::ParseError("missing timestamp".to_string()))?,
            v1_signature: v1_signature
                .ok_or_else(|| WebhookError::ParseError("missing v1 signature".to_string()))?,
        })
    }
}

/// What happened to a subscription, per the billing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingEventType {
    SubscriptionActivated,
    SubscriptionRenewed,
    PaymentFailed,
    SubscriptionCancelled,
    SubscriptionExpired,
}

impl BillingEventType {
    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "subscription.activated" => Some(Self::SubscriptionActivated),
            "subscription.renewed" => Some(Self::SubscriptionRenewed),
            "payment.failed" => Some(Self::PaymentFailed),
            "subscription.cancelled" => Some(Self::SubscriptionCancelled),
            "subscription.expired" => Some(Self::SubscriptionExpired),
            _ => None,
        }
    }
}

/// A verified billing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingEvent {
    /// Provider-assigned event id, used for idempotency.
    pub event_id: String,
    pub event_type: BillingEventType,
    /// The application user the subscription belongs to.
    pub user_id: String,
    /// Plan identifier, e.g. "monthly" or "annual".
    pub plan: String,
    /// End of the current paid period.
    pub current_period_end: Timestamp,
    /// Provider-side subscription reference.
    pub external_ref: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireEvent {
    id: String,
    #[serde(rename = "type")]
    event_type: String,
    user_id: String,
    plan: Option<String>,
    current_period_end: Option<u64>,
    subscription_ref: Option<String>,
}

/// Verifier for billing webhook deliveries.
pub struct WebhookVerifier {
    secret: String,
}

impl WebhookVerifier {
    /// Creates a verifier with the shared signing secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Verifies the signature and parses the payload into an event.
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature_header: &str,
        now: Timestamp,
    ) -> Result<BillingEvent, WebhookError> {
        let header = SignatureHeader::parse(signature_header)?;
        self.validate_timestamp(header.timestamp, now)?;

        let expected = self.compute_signature(header.timestamp, payload);
        if !constant_time_compare(&expected, &header.v1_signature) {
            return Err(WebhookError::InvalidSignature);
        }

        let wire: WireEvent = serde_json::from_slice(payload)
            .map_err(|e| WebhookError::ParseError(e.to_string()))?;

        let event_type = BillingEventType::from_wire(&wire.event_type)
            .ok_or_else(|| WebhookError::UnsupportedEvent(wire.event_type.clone()))?;

        Ok(BillingEvent {
            event_id: wire.id,
            event_type,
            user_id: wire.user_id,
            plan: wire.plan.unwrap_or_else(|| "monthly".to_string()),
            current_period_end: wire
                .current_period_end
                .map(Timestamp::from_unix_secs)
                .unwrap_or(now),
            external_ref: wire.subscription_ref,
        })
    }

    fn validate_timestamp(&self, event_ts: i64, now: Timestamp) -> Result<(), WebhookError> {
        let now_secs = now.as_unix_secs() as i64;
        let age = now_secs - event_ts;
        if age > MAX_EVENT_AGE_SECS || age < -MAX_CLOCK_SKEW_SECS {
            return Err(WebhookError::TimestampOutOfRange);
        }
        Ok(())
    }

    fn compute_signature(&self, timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }

    /// Produces a valid signature header for a payload. Test helper for
    /// exercising the verifier end to end.
    pub fn sign(&self, payload: &[u8], timestamp: i64) -> String {
        let sig = self.compute_signature(timestamp, payload);
        format!("t={},v1={}", timestamp, hex::encode(sig))
    }
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test";

    fn payload() -> Vec<u8> {
        serde_json::json!({
            "id": "evt_1",
            "type": "subscription.activated",
            "user_id": "user-1",
            "plan": "annual",
            "current_period_end": 2_000_000_000u64,
            "subscription_ref": "sub_9"
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn valid_signature_parses_event() {
        let verifier = WebhookVerifier::new(SECRET);
        let now = Timestamp::from_unix_secs(1_000_000);
        let header = verifier.sign(&payload(), 1_000_000);

        let event = verifier.verify_and_parse(&payload(), &header, now).unwrap();
        assert_eq!(event.event_type, BillingEventType::SubscriptionActivated);
        assert_eq!(event.user_id, "user-1");
        assert_eq!(event.plan, "annual");
        assert_eq!(event.external_ref.as_deref(), Some("sub_9"));
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let verifier = WebhookVerifier::new(SECRET);
        let other = WebhookVerifier::new("whsec_other");
        let now = Timestamp::from_unix_secs(1_000_000);
        let header = other.sign(&payload(), 1_000_000);

        let err = verifier.verify_and_parse(&payload(), &header, now).unwrap_err();
        assert_eq!(err, WebhookError::InvalidSignature);
    }

    #[test]
    fn tampered_payload_fails_verification() {
        let verifier = WebhookVerifier::new(SECRET);
        let now = Timestamp::from_unix_secs(1_000_000);
        let header = verifier.sign(&payload(), 1_000_000);

        let mut tampered = payload();
        tampered[10] ^= 1;
        let err = verifier.verify_and_parse(&tampered, &header, now).unwrap_err();
        assert_eq!(err, WebhookError::InvalidSignature);
    }

    #[test]
    fn old_delivery_is_rejected() {
        let verifier = WebhookVerifier::new(SECRET);
        let now = Timestamp::from_unix_secs(1_000_000);
        let header = verifier.sign(&payload(), 1_000_000 - 301);

        let err = verifier.verify_and_parse(&payload(), &header, now).unwrap_err();
        assert_eq!(err, WebhookError::TimestampOutOfRange);
    }

    #[test]
    fn future_delivery_beyond_skew_is_rejected() {
        let verifier = WebhookVerifier::new(SECRET);
        let now = Timestamp::from_unix_secs(1_000_000);
        let header = verifier.sign(&payload(), 1_000_000 + 61);

        let err = verifier.verify_and_parse(&payload(), &header, now).unwrap_err();
        assert_eq!(err, WebhookError::TimestampOutOfRange);
    }

    #[test]
    fn unknown_event_type_is_unsupported() {
        let verifier = WebhookVerifier::new(SECRET);
        let now = Timestamp::from_unix_secs(1_000_000);
        let body = br#"{"id":"evt_2","type":"invoice.created","user_id":"u"}"#;
        let header = verifier.sign(body, 1_000_000);

        let err = verifier.verify_and_parse(body, &header, now).unwrap_err();
        assert!(matches!(err, WebhookError::UnsupportedEvent(_)));
    }

    #[test]
    fn malformed_header_is_parse_error() {
        let verifier = WebhookVerifier::new(SECRET);
        let now = Timestamp::from_unix_secs(1_000_000);
        let err = verifier
            .verify_and_parse(&payload(), "not-a-header", now)
            .unwrap_err();
        assert!(matches!(err, WebhookError::ParseError(_)));
    }
}
