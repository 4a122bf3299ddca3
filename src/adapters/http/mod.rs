//! HTTP adapter - Route groups, middleware, and router assembly.

pub mod account;
pub mod chat;
pub mod compatibility;
pub mod consent;
pub mod couple;
pub mod error;
pub mod feedback;
pub mod middleware;
pub mod notifications;
pub mod subscription;
pub mod suggestions;
pub mod thoughts;
pub mod wellbeing;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use middleware::{auth_middleware, AuthState};

/// All route-group handler states, assembled by the composition root.
#[derive(Clone)]
pub struct ApiHandlers {
    pub account: account::AccountHandlers,
    pub couple: couple::CoupleHandlers,
    pub thoughts: thoughts::ThoughtHandlers,
    pub compatibility: compatibility::CompatibilityHandlers,
    pub suggestions: suggestions::SuggestionHandlers,
    pub feedback: feedback::FeedbackHandlers,
    pub consent: consent::ConsentHandlers,
    pub subscription: subscription::SubscriptionHandlers,
    pub notifications: notifications::NotificationHandlers,
    pub chat: chat::ChatHandlers,
    pub wellbeing: wellbeing::WellbeingHandlers,
}

/// GET /health - Liveness probe, no auth.
async fn health() -> StatusCode {
    StatusCode::OK
}

/// Assembles the full application router.
///
/// The auth middleware validates tokens for every route; routes that
/// work unauthenticated (health, the billing webhook) simply never use
/// the `RequireAuth` extractor.
pub fn api_router(handlers: ApiHandlers, verifier: AuthState) -> Router {
    Router::new()
        .nest("/api/account", account::account_routes(handlers.account.clone()))
        .nest("/api/quiz", account::quiz_routes(handlers.account))
        .nest("/api/couple", couple::couple_routes(handlers.couple))
        .nest("/api/thoughts", thoughts::thought_routes(handlers.thoughts))
        .nest(
            "/api/compatibility",
            compatibility::compatibility_routes(handlers.compatibility),
        )
        .nest(
            "/api/suggestions",
            suggestions::suggestion_routes(handlers.suggestions),
        )
        .nest("/api/feedback", feedback::feedback_routes(handlers.feedback))
        .nest("/api/consent", consent::consent_routes(handlers.consent))
        .nest(
            "/api/subscription",
            subscription::subscription_routes(handlers.subscription.clone()),
        )
        .nest(
            "/api/billing",
            subscription::billing_routes(handlers.subscription),
        )
        .nest(
            "/api/notifications",
            notifications::notification_routes(handlers.notifications),
        )
        .nest("/api/chat", chat::chat_routes(handlers.chat))
        .nest("/api/wellbeing", wellbeing::wellbeing_routes(handlers.wellbeing))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn_with_state(
            verifier,
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
