//! HTTP handlers for notification endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::notification::{
    GetPreferencesHandler, GetPreferencesQuery, RegisterDeviceCommand, RegisterDeviceHandler,
    UpdatePreferencesCommand, UpdatePreferencesHandler,
};

use super::dto::{PreferencesResponse, RegisterDeviceRequest, UpdatePreferencesRequest};

#[derive(Clone)]
pub struct NotificationHandlers {
    pub get_preferences: Arc<GetPreferencesHandler>,
    pub update_preferences: Arc<UpdatePreferencesHandler>,
    pub register_device: Arc<RegisterDeviceHandler>,
}

/// GET /api/notifications - Current toggle set
pub async fn get_preferences(
    State(handlers): State<NotificationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .get_preferences
        .handle(GetPreferencesQuery { user_id: user.id })
        .await
    {
        Ok(prefs) => (StatusCode::OK, Json(PreferencesResponse::from(prefs))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/notifications - Replace the toggle set
pub async fn update_preferences(
    State(handlers): State<NotificationHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdatePreferencesRequest>,
) -> Response {
    let cmd = UpdatePreferencesCommand {
        user_id: user.id,
        preferences: req.into(),
    };
    match handlers.update_preferences.handle(cmd).await {
        Ok(prefs) => (StatusCode::OK, Json(PreferencesResponse::from(prefs))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/notifications/devices - Register a push token
pub async fn register_device(
    State(handlers): State<NotificationHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RegisterDeviceRequest>,
) -> Response {
    let cmd = RegisterDeviceCommand {
        user_id: user.id,
        token: req.token,
        platform: req.platform,
    };
    match handlers.register_device.handle(cmd).await {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(e) => domain_error_response(e),
    }
}
