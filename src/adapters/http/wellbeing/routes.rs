//! HTTP routes for wellbeing endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_checkins, record_checkin, WellbeingHandlers};

/// Creates the wellbeing router, mounted at /api/wellbeing.
pub fn wellbeing_routes(handlers: WellbeingHandlers) -> Router {
    Router::new()
        .route("/", get(list_checkins).post(record_checkin))
        .with_state(handlers)
}
