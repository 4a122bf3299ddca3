//! HTTP routes for the chat companion.

use axum::{routing::get, Router};

use super::handlers::{get_history, send_message, ChatHandlers};

/// Creates the chat router, mounted at /api/chat.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/", get(get_history).post(send_message))
        .with_state(handlers)
}
