//! Uniform JSON error responses for the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Conventional JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Maps a domain error to an HTTP response.
///
/// Infrastructure details never leak: everything in the 500 family gets
/// a generic body.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code() {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,

        ErrorCode::ProfileNotFound
        | ErrorCode::CoupleNotFound
        | ErrorCode::InviteNotFound
        | ErrorCode::NotFound => StatusCode::NOT_FOUND,

        ErrorCode::AlreadyLinked
        | ErrorCode::InviteExpired
        | ErrorCode::TrialAlreadyUsed
        | ErrorCode::Conflict => StatusCode::CONFLICT,

        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden | ErrorCode::AccessExpired => StatusCode::FORBIDDEN,
        ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,

        ErrorCode::AiProviderError
        | ErrorCode::DatabaseError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(code = %error.code(), message = %error.message(), "request failed");
        return (
            status,
            Json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An unexpected error occurred",
            )),
        )
            .into_response();
    }

    (
        status,
        Json(ErrorResponse::new(
            error.code().to_string(),
            error.message().to_string(),
        )),
    )
        .into_response()
}
