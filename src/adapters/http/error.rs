//! HTTP error mapping.
//!
//! Converts layer errors into JSON responses with a stable
//! `{error, code}` envelope. Gateway failures keep the processor's
//! message verbatim - it is part of the contract visible to the frontend.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::handlers::payment::PaymentFlowError;
use crate::domain::auth::AuthError;
use crate::domain::session::SessionError;

/// Wire shape of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,

    /// Stable machine-readable code.
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error body.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// API error wrapper that converts layer errors to HTTP responses.
#[derive(Debug, Clone)]
pub enum ApiError {
    Auth(AuthError),
    Session(SessionError),
    Payment(PaymentFlowError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl From<PaymentFlowError> for ApiError {
    fn from(err: PaymentFlowError) -> Self {
        Self::Payment(err)
    }
}

fn auth_status(err: &AuthError) -> (StatusCode, &'static str) {
    match err {
        AuthError::MissingCredential => (StatusCode::UNAUTHORIZED, "MISSING_CREDENTIAL"),
        AuthError::InvalidCredential => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIAL"),
        AuthError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Auth(err) => {
                let (status, code) = auth_status(err);
                (status, code, err.to_string())
            }
            ApiError::Session(SessionError::NoActiveSession) => (
                StatusCode::UNAUTHORIZED,
                "NO_ACTIVE_SESSION",
                SessionError::NoActiveSession.to_string(),
            ),
            ApiError::Session(err @ SessionError::StoreUnavailable(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SESSION_STORE_UNAVAILABLE",
                err.to_string(),
            ),
            ApiError::Payment(PaymentFlowError::Auth(err)) => {
                let (status, code) = auth_status(err);
                (status, code, err.to_string())
            }
            ApiError::Payment(PaymentFlowError::Gateway(err)) => (
                StatusCode::BAD_GATEWAY,
                "GATEWAY_ERROR",
                // The processor's message, untranslated.
                err.message.clone(),
            ),
            ApiError::Payment(err @ PaymentFlowError::Webhook(_)) => (
                StatusCode::BAD_REQUEST,
                "WEBHOOK_ERROR",
                err.to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}
