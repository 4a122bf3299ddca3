//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::account::{
    CreateAccountCommand, CreateAccountHandler, DeleteAccountCommand, DeleteAccountHandler,
    GetAccountHandler, GetAccountQuery, SubmitQuizCommand, SubmitQuizHandler,
    UpdateAccountCommand, UpdateAccountHandler,
};

use super::dto::{
    AccountResponse, CreateAccountRequest, QuizResultResponse, SubmitQuizRequest,
    UpdateAccountRequest,
};

#[derive(Clone)]
pub struct AccountHandlers {
    pub create: Arc<CreateAccountHandler>,
    pub get: Arc<GetAccountHandler>,
    pub update: Arc<UpdateAccountHandler>,
    pub delete: Arc<DeleteAccountHandler>,
    pub submit_quiz: Arc<SubmitQuizHandler>,
}

/// POST /api/account - Create the profile at signup
pub async fn create_account(
    State(handlers): State<AccountHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateAccountRequest>,
) -> Response {
    let cmd = CreateAccountCommand {
        user_id: user.id,
        email: req.email,
        display_name: req.display_name,
    };
    match handlers.create.handle(cmd).await {
        Ok(profile) => {
            (StatusCode::CREATED, Json(AccountResponse::from(profile))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/account - Profile summary
pub async fn get_account(
    State(handlers): State<AccountHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .get
        .handle(GetAccountQuery { user_id: user.id })
        .await
    {
        Ok(Some(profile)) => (StatusCode::OK, Json(AccountResponse::from(profile))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("PROFILE_NOT_FOUND", "Profile not found")),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/account - Update settings
pub async fn update_account(
    State(handlers): State<AccountHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdateAccountRequest>,
) -> Response {
    let cmd = UpdateAccountCommand {
        user_id: user.id,
        display_name: req.display_name,
    };
    match handlers.update.handle(cmd).await {
        Ok(profile) => (StatusCode::OK, Json(AccountResponse::from(profile))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/account - Delete the account and all data
pub async fn delete_account(
    State(handlers): State<AccountHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .delete
        .handle(DeleteAccountCommand { user_id: user.id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/quiz - Submit quiz answers
pub async fn submit_quiz(
    State(handlers): State<AccountHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SubmitQuizRequest>,
) -> Response {
    let cmd = SubmitQuizCommand {
        user_id: user.id,
        answers: req.into_answers(),
    };
    match handlers.submit_quiz.handle(cmd).await {
        Ok(profile) => match (
            profile.scores().copied(),
            profile.primary_blueprint(),
            profile.secondary_blueprint(),
        ) {
            (Some(scores), Some(primary), Some(secondary)) => (
                StatusCode::OK,
                Json(QuizResultResponse {
                    scores,
                    primary_blueprint: primary,
                    secondary_blueprint: secondary,
                }),
            )
                .into_response(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    "INTERNAL_ERROR",
                    "Quiz scoring produced no result",
                )),
            )
                .into_response(),
        },
        Err(e) => domain_error_response(e),
    }
}
