//! HTTP handlers for couple endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::couple::{
    AcceptInviteCommand, AcceptInviteHandler, CreateInviteCommand, CreateInviteHandler,
    GetCoupleHandler, GetCoupleQuery, UnlinkPartnerCommand, UnlinkPartnerHandler,
    UpdateSharedPreferencesCommand, UpdateSharedPreferencesHandler,
};

use super::dto::{
    AcceptInviteRequest, CoupleResponse, InviteResponse, UpdateSharedPreferencesRequest,
};

#[derive(Clone)]
pub struct CoupleHandlers {
    pub create_invite: Arc<CreateInviteHandler>,
    pub accept_invite: Arc<AcceptInviteHandler>,
    pub get_couple: Arc<GetCoupleHandler>,
    pub unlink: Arc<UnlinkPartnerHandler>,
    pub update_shared: Arc<UpdateSharedPreferencesHandler>,
}

/// POST /api/couple/invite - Create an invite code
pub async fn create_invite(
    State(handlers): State<CoupleHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .create_invite
        .handle(CreateInviteCommand { user_id: user.id })
        .await
    {
        Ok(invite) => (StatusCode::CREATED, Json(InviteResponse::from(invite))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/couple/accept - Redeem an invite code
pub async fn accept_invite(
    State(handlers): State<CoupleHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<AcceptInviteRequest>,
) -> Response {
    let cmd = AcceptInviteCommand {
        user_id: user.id,
        code: req.code,
    };
    match handlers.accept_invite.handle(cmd).await {
        Ok(link) => (StatusCode::CREATED, Json(CoupleResponse::from(link))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/couple - Current link and shared preferences
pub async fn get_couple(
    State(handlers): State<CoupleHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .get_couple
        .handle(GetCoupleQuery { user_id: user.id })
        .await
    {
        Ok(Some(link)) => (StatusCode::OK, Json(CoupleResponse::from(link))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("COUPLE_NOT_FOUND", "Not linked to a partner")),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/couple/preferences - Update shared preferences
pub async fn update_shared_preferences(
    State(handlers): State<CoupleHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdateSharedPreferencesRequest>,
) -> Response {
    let cmd = UpdateSharedPreferencesCommand {
        user_id: user.id,
        default_intensity: req.default_intensity,
        share_access: req.share_access,
    };
    match handlers.update_shared.handle(cmd).await {
        Ok(link) => (StatusCode::OK, Json(CoupleResponse::from(link))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/couple - Unlink both partners
pub async fn unlink_partner(
    State(handlers): State<CoupleHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .unlink
        .handle(UnlinkPartnerCommand { user_id: user.id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
