//! Payment gateway port.
//!
//! Defines the contract for forwarding checkout, subscription, and
//! cancellation requests to the external payment processor. This layer is
//! a pass-through: arguments go out verbatim, the processor's JSON
//! response comes back verbatim, and every processor failure surfaces
//! unchanged to the caller.
//!
//! # Policy
//!
//! - No retries, no circuit breaking; failures surface immediately
//! - No semantic validation of amounts or currency codes; the processor is
//!   the source of truth for validity
//! - The request timeout is the adapter's single resilience knob

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request to create a hosted checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Amount in the smallest currency unit.
    pub amount: i64,

    /// Currency code, passed through without validation.
    pub currency: String,
}

/// Request to start a subscription for an existing customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    /// Processor customer reference.
    pub customer_id: String,

    /// Processor price reference.
    pub price_id: String,
}

/// Request to cancel a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
    /// Processor subscription reference.
    pub subscription_id: String,
}

/// Forwards payment operations to the external processor.
///
/// Responses are returned as raw `serde_json::Value` so the processor's
/// object shape reaches the frontend unmodified.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout session for a one-off payment.
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<serde_json::Value, GatewayError>;

    /// Create a subscription binding a customer to a price.
    async fn create_subscription(
        &self,
        request: SubscriptionRequest,
    ) -> Result<serde_json::Value, GatewayError>;

    /// Cancel an existing subscription.
    async fn cancel_subscription(
        &self,
        request: CancelRequest,
    ) -> Result<serde_json::Value, GatewayError>;
}

/// Failure surfaced by the payment processor or the transport beneath it.
///
/// The message is part of the contract visible to the frontend, so it is
/// carried verbatim and never translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayError {
    /// HTTP status returned by the processor, when one was received.
    pub status: Option<u16>,

    /// Processor (or transport) error message, verbatim.
    pub message: String,
}

impl GatewayError {
    /// Failure before any response arrived (DNS, connect, timeout).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Non-success response from the processor.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "Gateway error ({}): {}", status, self.message),
            None => write!(f, "Gateway error: {}", self.message),
        }
    }
}

impl std::error::Error for GatewayError {}
