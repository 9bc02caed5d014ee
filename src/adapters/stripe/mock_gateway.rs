//! Mock payment gateway for testing.
//!
//! Provides a configurable mock implementation of `PaymentGateway` for
//! unit and integration tests. Supports:
//! - Pre-configured responses per operation
//! - Error injection
//! - Call recording for argument assertions

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::ports::{
    CancelRequest, CheckoutRequest, GatewayError, PaymentGateway, SubscriptionRequest,
};

/// Recorded gateway call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    /// `create_checkout_session` with the forwarded request.
    Checkout(CheckoutRequest),

    /// `create_subscription` with the forwarded request.
    Subscription(SubscriptionRequest),

    /// `cancel_subscription` with the forwarded request.
    Cancel(CancelRequest),
}

#[derive(Default)]
struct MockState {
    /// Response returned for checkout calls.
    checkout_response: Option<serde_json::Value>,

    /// Response returned for subscription calls.
    subscription_response: Option<serde_json::Value>,

    /// Response returned for cancellation calls.
    cancel_response: Option<serde_json::Value>,

    /// Error returned by every call when set.
    next_error: Option<GatewayError>,

    /// Every call in arrival order.
    calls: Vec<GatewayCall>,
}

/// Mock payment gateway.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// let result = mock.create_checkout_session(request).await?;
/// assert_eq!(mock.checkout_calls().len(), 1);
/// ```
#[derive(Default, Clone)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

impl MockPaymentGateway {
    /// Creates a mock with default canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response returned for checkout calls.
    pub fn with_checkout_response(self, response: serde_json::Value) -> Self {
        self.inner.lock().unwrap().checkout_response = Some(response);
        self
    }

    /// Sets the response returned for subscription calls.
    pub fn with_subscription_response(self, response: serde_json::Value) -> Self {
        self.inner.lock().unwrap().subscription_response = Some(response);
        self
    }

    /// Sets the response returned for cancellation calls.
    pub fn with_cancel_response(self, response: serde_json::Value) -> Self {
        self.inner.lock().unwrap().cancel_response = Some(response);
        self
    }

    /// Makes every call fail with `error`.
    pub fn with_error(self, error: GatewayError) -> Self {
        self.inner.lock().unwrap().next_error = Some(error);
        self
    }

    /// Every recorded call, in arrival order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Recorded checkout requests only.
    pub fn checkout_calls(&self) -> Vec<CheckoutRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                GatewayCall::Checkout(req) => Some(req),
                _ => None,
            })
            .collect()
    }

    /// Total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().calls.len()
    }

    fn respond(
        &self,
        call: GatewayCall,
        response: impl FnOnce(&MockState) -> serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(call);

        if let Some(error) = state.next_error.clone() {
            return Err(error);
        }

        Ok(response(&state))
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        let amount = request.amount;
        let currency = request.currency.clone();
        self.respond(GatewayCall::Checkout(request), |state| {
            state.checkout_response.clone().unwrap_or_else(|| {
                json!({
                    "id": "cs_mock_123",
                    "object": "checkout.session",
                    "amount_total": amount,
                    "currency": currency,
                    "url": "https://checkout.stripe.com/c/pay/cs_mock_123"
                })
            })
        })
    }

    async fn create_subscription(
        &self,
        request: SubscriptionRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        let customer = request.customer_id.clone();
        let price = request.price_id.clone();
        self.respond(GatewayCall::Subscription(request), |state| {
            state.subscription_response.clone().unwrap_or_else(|| {
                json!({
                    "id": "sub_mock_123",
                    "object": "subscription",
                    "customer": customer,
                    "status": "active",
                    "items": {"data": [{"price": {"id": price}}]}
                })
            })
        })
    }

    async fn cancel_subscription(
        &self,
        request: CancelRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        let subscription = request.subscription_id.clone();
        self.respond(GatewayCall::Cancel(request), |state| {
            state.cancel_response.clone().unwrap_or_else(|| {
                json!({
                    "id": subscription,
                    "object": "subscription",
                    "status": "canceled"
                })
            })
        })
    }
}
