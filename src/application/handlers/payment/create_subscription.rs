//! Create-subscription use case.

use std::sync::Arc;

use crate::domain::auth::{Identity, Role};
use crate::ports::{PaymentGateway, SubscriptionRequest};

use super::PaymentFlowError;

/// Command to start a subscription for an existing processor customer.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    /// The authenticated caller.
    pub identity: Identity,

    /// Processor customer reference.
    pub customer_id: String,

    /// Processor price reference.
    pub price_id: String,
}

/// Handler for [`CreateSubscriptionCommand`].
pub struct CreateSubscriptionHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateSubscriptionHandler {
    /// Creates the handler with its gateway dependency.
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Check the caller's role, then forward to the processor.
    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<serde_json::Value, PaymentFlowError> {
        cmd.identity.require_role(Role::User)?;

        let subscription = self
            .gateway
            .create_subscription(SubscriptionRequest {
                customer_id: cmd.customer_id,
                price_id: cmd.price_id,
            })
            .await?;

        Ok(subscription)
    }
}
