//! Verified payment event types.
//!
//! A `PaymentEvent` is the typed result of a successfully verified webhook
//! payload. The `data.object` shape depends on the event type, so it is
//! modeled as a tagged union with a small set of known variants plus a
//! catch-all that preserves the raw JSON for forward compatibility.

use serde::{Deserialize, Serialize};

/// Event type, parsed from the dot-namespaced `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A payment intent completed successfully.
    PaymentIntentSucceeded,

    /// A payment method was attached to a customer.
    PaymentMethodAttached,

    /// Any event type this service does not handle. Never an error.
    Unknown(String),
}

impl EventType {
    /// Parse a wire event type string.
    pub fn parse(s: &str) -> Self {
        match s {
            "payment_intent.succeeded" => EventType::PaymentIntentSucceeded,
            "payment_method.attached" => EventType::PaymentMethodAttached,
            other => EventType::Unknown(other.to_string()),
        }
    }

    /// The wire representation of this event type.
    pub fn as_str(&self) -> &str {
        match self {
            EventType::PaymentIntentSucceeded => "payment_intent.succeeded",
            EventType::PaymentMethodAttached => "payment_method.attached",
            EventType::Unknown(s) => s,
        }
    }
}

/// Payment intent object as delivered in `data.object`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentObject {
    /// Intent identifier (pi_...).
    pub id: String,

    /// Amount in the smallest currency unit.
    pub amount: Option<i64>,

    /// Lowercase currency code.
    pub currency: Option<String>,

    /// Processor-reported status.
    pub status: Option<String>,
}

/// Payment method object as delivered in `data.object`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodObject {
    /// Method identifier (pm_...).
    pub id: String,

    /// Customer the method was attached to.
    pub customer: Option<String>,

    /// Method kind (card, sepa_debit, ...).
    #[serde(rename = "type")]
    pub method_type: Option<String>,
}

/// Event payload, keyed by the event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventObject {
    /// `payment_intent.*` payloads.
    PaymentIntent(PaymentIntentObject),

    /// `payment_method.*` payloads.
    PaymentMethod(PaymentMethodObject),

    /// Raw payload for event types without a typed variant.
    Unknown {
        /// The unparsed `data.object` value.
        raw: serde_json::Value,
    },
}

/// Verified, typed payment event decoded from a webhook payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEvent {
    /// Event identifier from the processor (evt_...).
    pub id: String,

    /// Parsed event type.
    pub event_type: EventType,

    /// Typed `data.object` payload.
    pub data: EventObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_event_types_parse_to_variants() {
        assert_eq!(
            EventType::parse("payment_intent.succeeded"),
            EventType::PaymentIntentSucceeded
        );
        assert_eq!(
            EventType::parse("payment_method.attached"),
            EventType::PaymentMethodAttached
        );
    }

    #[test]
    fn unrecognized_event_types_parse_to_unknown() {
        let parsed = EventType::parse("foo.bar");
        assert_eq!(parsed, EventType::Unknown("foo.bar".to_string()));
        assert_eq!(parsed.as_str(), "foo.bar");
    }

    #[test]
    fn event_type_round_trips_through_as_str() {
        for wire in ["payment_intent.succeeded", "payment_method.attached", "a.b"] {
            assert_eq!(EventType::parse(wire).as_str(), wire);
        }
    }

    #[test]
    fn payment_intent_object_parses_processor_json() {
        let json = r#"{
            "id": "pi_123",
            "amount": 1999,
            "currency": "usd",
            "status": "succeeded"
        }"#;
        let intent: PaymentIntentObject = serde_json::from_str(json).unwrap();
        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.amount, Some(1999));
        assert_eq!(intent.currency.as_deref(), Some("usd"));
    }

    #[test]
    fn payment_method_object_parses_type_field() {
        let json = r#"{"id": "pm_9", "customer": "cus_1", "type": "card"}"#;
        let method: PaymentMethodObject = serde_json::from_str(json).unwrap();
        assert_eq!(method.method_type.as_deref(), Some("card"));
    }
}
