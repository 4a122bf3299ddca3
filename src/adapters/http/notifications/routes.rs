//! HTTP routes for notification endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_preferences, register_device, update_preferences, NotificationHandlers};

/// Creates the notifications router, mounted at /api/notifications.
pub fn notification_routes(handlers: NotificationHandlers) -> Router {
    Router::new()
        .route("/", get(get_preferences).put(update_preferences))
        .route("/devices", post(register_device))
        .with_state(handlers)
}
