//! HTTP handlers for subscription endpoints, including the billing
//! webhook.
//!
//! The webhook route is unauthenticated: the HMAC signature is the
//! authentication. Invalid signatures get 401; malformed or unsupported
//! payloads get 400 so the provider stops redelivering them.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::subscription::{
    ApplyBillingEventHandler, CheckAccessHandler, CheckAccessQuery, StartTrialCommand,
    StartTrialHandler,
};
use crate::domain::foundation::Timestamp;
use crate::domain::subscription::{WebhookError, WebhookVerifier};

use super::dto::{AccessStatusResponse, TrialStartedResponse};

#[derive(Clone)]
pub struct SubscriptionHandlers {
    pub check_access: Arc<CheckAccessHandler>,
    pub start_trial: Arc<StartTrialHandler>,
    pub apply_event: Arc<ApplyBillingEventHandler>,
    pub verifier: Arc<WebhookVerifier>,
}

/// GET /api/subscription - Current access status
pub async fn get_access_status(
    State(handlers): State<SubscriptionHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .check_access
        .handle(CheckAccessQuery { user_id: user.id })
        .await
    {
        Ok(status) => (StatusCode::OK, Json(AccessStatusResponse::from(status))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/subscription/trial - Start the free trial
pub async fn start_trial(
    State(handlers): State<SubscriptionHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .start_trial
        .handle(StartTrialCommand { user_id: user.id })
        .await
    {
        Ok(profile) => match (profile.trial_started_at(), profile.trial_ends_at()) {
            (Some(trial_started_at), Some(trial_ends_at)) => (
                StatusCode::OK,
                Json(TrialStartedResponse {
                    trial_started_at,
                    trial_ends_at,
                }),
            )
                .into_response(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("INTERNAL_ERROR", "Trial not recorded")),
            )
                .into_response(),
        },
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/billing/webhook - Signature-verified billing events
pub async fn billing_webhook(
    State(handlers): State<SubscriptionHandlers>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = match headers.get("Billing-Signature").and_then(|v| v.to_str().ok()) {
        Some(signature) => signature,
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("MISSING_SIGNATURE", "Signature required")),
            )
                .into_response()
        }
    };

    let event = match handlers
        .verifier
        .verify_and_parse(&body, signature, Timestamp::now())
    {
        Ok(event) => event,
        Err(WebhookError::InvalidSignature) | Err(WebhookError::TimestampOutOfRange) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("INVALID_SIGNATURE", "Verification failed")),
            )
                .into_response()
        }
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("INVALID_EVENT", e.to_string())),
            )
                .into_response()
        }
    };

    match handlers.apply_event.handle(event).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => domain_error_response(e),
    }
}
