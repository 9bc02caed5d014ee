//! Request DTOs for payment endpoints.
//!
//! Field names match the frontend wire contract (camelCase). Amounts and
//! currency codes are type-checked here and nowhere else; semantic
//! validity is the processor's concern.

use serde::{Deserialize, Serialize};

/// Body of `POST /payment/create-checkout-session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCheckoutSessionRequest {
    /// Amount in the smallest currency unit.
    pub amount: i64,

    /// Currency code.
    pub currency: String,
}

/// Body of `POST /payment/create-subscription`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    /// Processor customer reference.
    pub customer_id: String,

    /// Processor price reference.
    pub price_id: String,
}

/// Body of `POST /payment/cancel-subscription`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelSubscriptionRequest {
    /// Processor subscription reference.
    pub subscription_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_request_deserializes_wire_shape() {
        let req: CreateCheckoutSessionRequest =
            serde_json::from_str(r#"{"amount": 1999, "currency": "usd"}"#).unwrap();
        assert_eq!(req.amount, 1999);
        assert_eq!(req.currency, "usd");
    }

    #[test]
    fn subscription_request_uses_camel_case() {
        let req: CreateSubscriptionRequest =
            serde_json::from_str(r#"{"customerId": "cus_1", "priceId": "price_1"}"#).unwrap();
        assert_eq!(req.customer_id, "cus_1");
        assert_eq!(req.price_id, "price_1");
    }

    #[test]
    fn cancel_request_uses_camel_case() {
        let req: CancelSubscriptionRequest =
            serde_json::from_str(r#"{"subscriptionId": "sub_1"}"#).unwrap();
        assert_eq!(req.subscription_id, "sub_1");
    }
}
