//! Payment use-case handlers.
//!
//! One handler per operation, each taking the caller's [`Identity`] and
//! enforcing its role requirement before touching the gateway.
//!
//! [`Identity`]: crate::domain::auth::Identity

mod cancel_subscription;
mod create_checkout;
mod create_subscription;
mod process_webhook;

pub use cancel_subscription::{CancelSubscriptionCommand, CancelSubscriptionHandler};
pub use create_checkout::{CreateCheckoutCommand, CreateCheckoutHandler};
pub use create_subscription::{CreateSubscriptionCommand, CreateSubscriptionHandler};
pub use process_webhook::{ProcessWebhookCommand, ProcessWebhookHandler};

use thiserror::Error;

use crate::adapters::stripe::WebhookError;
use crate::domain::auth::AuthError;
use crate::ports::GatewayError;

/// Failures surfaced by the payment use cases.
///
/// Gateway errors pass through untranslated; webhook failures carry the
/// fixed `Webhook Error:` prefix the processor-facing contract requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentFlowError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Webhook Error: {0}")]
    Webhook(#[from] WebhookError),
}
