//! Create-checkout use case.

use std::sync::Arc;

use crate::domain::auth::{Identity, Role};
use crate::ports::{CheckoutRequest, PaymentGateway};

use super::PaymentFlowError;

/// Command to start a hosted checkout for the caller.
#[derive(Debug, Clone)]
pub struct CreateCheckoutCommand {
    /// The authenticated caller.
    pub identity: Identity,

    /// Amount in the smallest currency unit, passed through unvalidated.
    pub amount: i64,

    /// Currency code, passed through unvalidated.
    pub currency: String,
}

/// Handler for [`CreateCheckoutCommand`].
pub struct CreateCheckoutHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateCheckoutHandler {
    /// Creates the handler with its gateway dependency.
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Check the caller's role, then forward to the processor.
    ///
    /// The processor's session object is returned verbatim.
    pub async fn handle(
        &self,
        cmd: CreateCheckoutCommand,
    ) -> Result<serde_json::Value, PaymentFlowError> {
        cmd.identity.require_role(Role::User)?;

        let session = self
            .gateway
            .create_checkout_session(CheckoutRequest {
                amount: cmd.amount,
                currency: cmd.currency,
            })
            .await?;

        Ok(session)
    }
}
