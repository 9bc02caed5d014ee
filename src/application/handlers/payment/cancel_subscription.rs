//! Cancel-subscription use case.

use std::sync::Arc;

use crate::domain::auth::{Identity, Role};
use crate::ports::{CancelRequest, PaymentGateway};

use super::PaymentFlowError;

/// Command to cancel a subscription.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    /// The authenticated caller.
    pub identity: Identity,

    /// Processor subscription reference.
    pub subscription_id: String,
}

/// Handler for [`CancelSubscriptionCommand`].
pub struct CancelSubscriptionHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CancelSubscriptionHandler {
    /// Creates the handler with its gateway dependency.
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Check the caller's role, then forward to the processor.
    pub async fn handle(
        &self,
        cmd: CancelSubscriptionCommand,
    ) -> Result<serde_json::Value, PaymentFlowError> {
        cmd.identity.require_role(Role::User)?;

        let subscription = self
            .gateway
            .cancel_subscription(CancelRequest {
                subscription_id: cmd.subscription_id,
            })
            .await?;

        Ok(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stripe::{GatewayCall, MockPaymentGateway};
    use crate::ports::GatewayError;

    fn command() -> CancelSubscriptionCommand {
        CancelSubscriptionCommand {
            identity: Identity::new("user-1", Role::User),
            subscription_id: "sub_55".to_string(),
        }
    }

    #[tokio::test]
    async fn forwards_subscription_reference() {
        let mock = MockPaymentGateway::new();
        let handler = CancelSubscriptionHandler::new(Arc::new(mock.clone()));

        handler.handle(command()).await.unwrap();

        match &mock.calls()[0] {
            GatewayCall::Cancel(req) => assert_eq!(req.subscription_id, "sub_55"),
            other => panic!("Expected a cancel call, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn processor_failure_reaches_the_caller_unchanged() {
        let mock = MockPaymentGateway::new().with_error(GatewayError::api(
            404,
            "No such subscription: sub_55",
        ));
        let handler = CancelSubscriptionHandler::new(Arc::new(mock));

        let err = handler.handle(command()).await.unwrap_err();

        match err {
            PaymentFlowError::Gateway(gateway) => {
                assert_eq!(gateway.status, Some(404));
                assert_eq!(gateway.message, "No such subscription: sub_55");
            }
            other => panic!("Expected a gateway error, got {:?}", other),
        }
    }
}
