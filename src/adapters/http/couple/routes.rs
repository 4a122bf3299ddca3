//! HTTP routes for couple endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    accept_invite, create_invite, get_couple, unlink_partner, update_shared_preferences,
    CoupleHandlers,
};

/// Creates the couple router, mounted at /api/couple.
pub fn couple_routes(handlers: CoupleHandlers) -> Router {
    Router::new()
        .route("/", get(get_couple).delete(unlink_partner))
        .route("/invite", post(create_invite))
        .route("/accept", post(accept_invite))
        .route("/preferences", put(update_shared_preferences))
        .with_state(handlers)
}
