//! HTTP routes for consent endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_consents, record_consent, ConsentHandlers};

/// Creates the consent router, mounted at /api/consent.
pub fn consent_routes(handlers: ConsentHandlers) -> Router {
    Router::new()
        .route("/", get(list_consents).post(record_consent))
        .with_state(handlers)
}
