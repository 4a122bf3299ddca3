//! Subscription module - Trial gate, paid records, and billing webhooks.

mod access;
mod record;
mod webhook;

pub use access::{evaluate_access, AccessInputs, AccessSource, AccessStatus};
pub use record::{SubscriptionRecord, SubscriptionStatus};
pub use webhook::{
    BillingEvent, BillingEventType, SignatureHeader, WebhookError, WebhookVerifier,
};
