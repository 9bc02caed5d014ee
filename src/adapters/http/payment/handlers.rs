//! HTTP handlers for payment endpoints.
//!
//! These handlers connect axum routes to the payment use-case handlers.
//! Gateway responses are returned to the caller byte-for-byte as the
//! processor produced them.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::stripe::WebhookVerifier;
use crate::application::handlers::payment::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CreateCheckoutCommand,
    CreateCheckoutHandler, CreateSubscriptionCommand, CreateSubscriptionHandler,
    PaymentFlowError, ProcessWebhookCommand, ProcessWebhookHandler,
};
use crate::ports::PaymentGateway;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{
    CancelSubscriptionRequest, CreateCheckoutSessionRequest, CreateSubscriptionRequest,
};

/// Shared state for payment routes.
#[derive(Clone)]
pub struct PaymentAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub webhook_verifier: Arc<WebhookVerifier>,
}

impl PaymentAppState {
    /// Create handlers on demand from the shared state.
    fn create_checkout_handler(&self) -> CreateCheckoutHandler {
        CreateCheckoutHandler::new(self.gateway.clone())
    }

    fn create_subscription_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(self.gateway.clone())
    }

    fn cancel_subscription_handler(&self) -> CancelSubscriptionHandler {
        CancelSubscriptionHandler::new(self.gateway.clone())
    }

    fn webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(self.webhook_verifier.clone())
    }
}

/// POST /payment/create-checkout-session
pub async fn create_checkout_session(
    State(state): State<PaymentAppState>,
    RequireAuth(identity): RequireAuth,
    Json(request): Json<CreateCheckoutSessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_checkout_handler();
    let cmd = CreateCheckoutCommand {
        identity,
        amount: request.amount,
        currency: request.currency,
    };

    let session = handler.handle(cmd).await?;

    Ok(Json(session))
}

/// POST /payment/create-subscription
pub async fn create_subscription(
    State(state): State<PaymentAppState>,
    RequireAuth(identity): RequireAuth,
    Json(request): Json<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_subscription_handler();
    let cmd = CreateSubscriptionCommand {
        identity,
        customer_id: request.customer_id,
        price_id: request.price_id,
    };

    let subscription = handler.handle(cmd).await?;

    Ok(Json(subscription))
}

/// POST /payment/cancel-subscription
pub async fn cancel_subscription(
    State(state): State<PaymentAppState>,
    RequireAuth(identity): RequireAuth,
    Json(request): Json<CancelSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.cancel_subscription_handler();
    let cmd = CancelSubscriptionCommand {
        identity,
        subscription_id: request.subscription_id,
    };

    let subscription = handler.handle(cmd).await?;

    Ok(Json(subscription))
}

/// POST /payment/webhook
///
/// No bearer auth: trust comes from the payload signature. When several
/// signature headers are present, the first is used.
pub async fn handle_webhook(
    State(state): State<PaymentAppState>,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let signature = headers
        .get_all("stripe-signature")
        .iter()
        .next()
        .and_then(|value| value.to_str().ok())
        .ok_or(PaymentFlowError::Webhook(
            crate::adapters::stripe::WebhookError::MissingSignature,
        ))?;

    let handler = state.webhook_handler();
    let cmd = ProcessWebhookCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };

    let ack = handler.handle(cmd)?;

    Ok(Json(ack))
}
