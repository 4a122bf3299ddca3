//! HTTP routes for account endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_account, delete_account, get_account, submit_quiz, update_account, AccountHandlers,
};

/// Creates the account router, mounted at /api/account.
pub fn account_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route(
            "/",
            get(get_account)
                .post(create_account)
                .put(update_account)
                .delete(delete_account),
        )
        .with_state(handlers)
}

/// Creates the quiz router, mounted at /api/quiz.
pub fn quiz_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route("/", post(submit_quiz))
        .with_state(handlers)
}
