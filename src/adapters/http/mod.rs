//! HTTP adapter - axum routers, middleware, and error mapping.
//!
//! Route layout:
//!
//! ```text
//! /payment/create-checkout-session   POST  bearer, role user
//! /payment/create-subscription       POST  bearer, role user
//! /payment/cancel-subscription       POST  bearer, role user
//! /payment/webhook                   POST  signature-verified, no bearer
//! /auth/login                        POST  bearer
//! /auth/session                      GET   session cookie
//! /auth/logout                       POST  session cookie, best-effort
//! /auth/sessions/:id                 GET   bearer, role admin
//! ```

mod error;
pub mod middleware;
pub mod payment;
pub mod session;

pub use error::{ApiError, ErrorResponse};

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::ports::TokenValidator;

use middleware::{auth_middleware, AuthState};
use payment::{payment_routes, webhook_routes, PaymentAppState};
use session::{session_routes, SessionAppState};

/// Everything the HTTP surface depends on.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<dyn TokenValidator>,
    pub payment: PaymentAppState,
    pub session: SessionAppState,
}

/// Build the application router.
///
/// Bearer-authenticated routes sit behind the auth middleware; the
/// webhook route does not, since its trust comes from the payload
/// signature.
pub fn app_router(state: AppState) -> Router {
    let validator: AuthState = state.validator;

    let authenticated = Router::new()
        .nest("/payment", payment_routes().with_state(state.payment.clone()))
        .nest("/auth", session_routes().with_state(state.session))
        .layer(from_fn_with_state(validator, auth_middleware));

    let webhooks = Router::new().nest("/payment", webhook_routes().with_state(state.payment));

    Router::new().merge(authenticated).merge(webhooks)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::adapters::auth::MockTokenValidator;
    use crate::adapters::session::InMemorySessionStore;
    use crate::adapters::stripe::{MockPaymentGateway, WebhookVerifier};

    #[test]
    fn app_router_builds() {
        let state = AppState {
            validator: Arc::new(MockTokenValidator::new()),
            payment: PaymentAppState {
                gateway: Arc::new(MockPaymentGateway::new()),
                webhook_verifier: Arc::new(WebhookVerifier::new("whsec_test")),
            },
            session: SessionAppState {
                sessions: Arc::new(InMemorySessionStore::new()),
            },
        };

        let _router = app_router(state);
    }
}
