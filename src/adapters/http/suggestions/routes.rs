//! HTTP routes for suggestion endpoints.

use axum::{routing::post, Router};

use super::handlers::{generate_suggestions, SuggestionHandlers};

/// Creates the suggestions router, mounted at /api/suggestions.
pub fn suggestion_routes(handlers: SuggestionHandlers) -> Router {
    Router::new()
        .route("/", post(generate_suggestions))
        .with_state(handlers)
}
