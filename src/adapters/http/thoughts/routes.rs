//! HTTP routes for thought bubble endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_thoughts, mark_thought_read, send_thought, ThoughtHandlers};

/// Creates the thoughts router, mounted at /api/thoughts.
pub fn thought_routes(handlers: ThoughtHandlers) -> Router {
    Router::new()
        .route("/", get(list_thoughts).post(send_thought))
        .route("/:id/read", post(mark_thought_read))
        .with_state(handlers)
}
