//! Stripe payment processor adapters.
//!
//! - `StripeGateway` - pass-through implementation of the `PaymentGateway`
//!   port (configurable timeout, zero retries)
//! - `WebhookVerifier` - HMAC-SHA256 signature verification with
//!   constant-time comparison
//! - `MockPaymentGateway` - call-recording mock for tests
//!
//! All secrets are handled via `secrecy::SecretString`.

mod gateway;
mod mock_gateway;
mod webhook;

pub use gateway::{StripeConfig, StripeGateway};
pub use mock_gateway::{GatewayCall, MockPaymentGateway};
pub use webhook::{hex_encode, WebhookError, WebhookVerifier};
