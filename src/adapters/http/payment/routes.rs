//! Axum router configuration for payment endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{
    cancel_subscription, create_checkout_session, create_subscription, handle_webhook,
    PaymentAppState,
};

/// Routes requiring a bearer credential with role `user`.
///
/// - `POST /create-checkout-session`
/// - `POST /create-subscription`
/// - `POST /cancel-subscription`
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new()
        .route("/create-checkout-session", post(create_checkout_session))
        .route("/create-subscription", post(create_subscription))
        .route("/cancel-subscription", post(cancel_subscription))
}

/// Webhook routes.
///
/// Separate from the payment routes because webhooks carry no bearer
/// credential; they are verified via signature instead.
///
/// - `POST /webhook`
pub fn webhook_routes() -> Router<PaymentAppState> {
    Router::new().route("/webhook", post(handle_webhook))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::stripe::{MockPaymentGateway, WebhookVerifier};

    fn test_state() -> PaymentAppState {
        PaymentAppState {
            gateway: Arc::new(MockPaymentGateway::new()),
            webhook_verifier: Arc::new(WebhookVerifier::new("whsec_test")),
        }
    }

    #[test]
    fn payment_routes_creates_router() {
        let router = payment_routes();
        let _: Router<()> = router.with_state(test_state());
    }

    #[test]
    fn webhook_routes_creates_router() {
        let router = webhook_routes();
        let _: Router<()> = router.with_state(test_state());
    }
}
