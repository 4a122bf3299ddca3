//! HTTP routes for compatibility endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_compatibility, CompatibilityHandlers};

/// Creates the compatibility router, mounted at /api/compatibility.
pub fn compatibility_routes(handlers: CompatibilityHandlers) -> Router {
    Router::new()
        .route("/", get(get_compatibility))
        .with_state(handlers)
}
