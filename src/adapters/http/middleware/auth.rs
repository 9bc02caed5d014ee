//! Authentication middleware and extractors.
//!
//! The middleware turns `Authorization: Bearer <token>` into a domain
//! [`Identity`] via the `TokenValidator` port and injects it into request
//! extensions. Handlers opt in with the [`RequireAuth`] extractor.
//!
//! ```text
//! Request → auth_middleware → injects Identity into extensions
//!                                   ↓
//!                           Handler → RequireAuth extractor reads it
//! ```
//!
//! A request with no `Authorization` header passes through untouched;
//! `RequireAuth` rejects it at the handler. A header that is present but
//! malformed or fails validation is rejected here, before any handler
//! runs.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::domain::auth::{extract_bearer, AuthError, Identity};
use crate::ports::TokenValidator;

use super::super::error::ApiError;

/// Auth middleware state - the credential validator.
pub type AuthState = Arc<dyn TokenValidator>;

/// Validates bearer credentials and injects the caller's identity.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    // Absent header: pass through; RequireAuth enforces where needed.
    let Some(header) = header else {
        return next.run(request).await;
    };

    let identity = match extract_bearer(Some(header)) {
        Ok(token) => validator.validate(token).await,
        Err(err) => Err(err),
    };

    match identity {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// Extractor that requires an authenticated identity.
///
/// Rejects with `MissingCredential` when the middleware did not inject one.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(identity): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", identity.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub Identity);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Identity>()
                .cloned()
                .map(RequireAuth)
                .ok_or(ApiError::Auth(AuthError::MissingCredential))
        })
    }
}
