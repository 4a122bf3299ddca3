//! HTTP routes for subscription endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{billing_webhook, get_access_status, start_trial, SubscriptionHandlers};

/// Creates the subscription router, mounted at /api/subscription.
pub fn subscription_routes(handlers: SubscriptionHandlers) -> Router {
    Router::new()
        .route("/", get(get_access_status))
        .route("/trial", post(start_trial))
        .with_state(handlers)
}

/// Creates the billing webhook router, mounted at /api/billing.
pub fn billing_routes(handlers: SubscriptionHandlers) -> Router {
    Router::new()
        .route("/webhook", post(billing_webhook))
        .with_state(handlers)
}
