//! Payment event dispatcher.
//!
//! Routes a verified payment event to its handler by exact match on the
//! event type. Every branch is acknowledgment-only: the business reaction
//! to these events lives downstream, and this service's job ends at
//! logging receipt. Unknown event types are acknowledged too - an
//! unrecognized `type` must never fail the request.
//!
//! Duplicate delivery of the same event id is not deduplicated.

use serde::{Deserialize, Serialize};

use crate::domain::payment::{EventType, PaymentEvent};

/// Acknowledgment returned to the processor for every verified event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAck {
    /// Always true once verification succeeded.
    pub received: bool,
}

impl WebhookAck {
    fn received() -> Self {
        Self { received: true }
    }
}

/// Dispatches verified payment events to per-type handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventDispatcher;

impl EventDispatcher {
    /// Creates a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Route `event` to its handler and acknowledge receipt.
    pub fn dispatch(&self, event: &PaymentEvent) -> WebhookAck {
        match &event.event_type {
            EventType::PaymentIntentSucceeded => {
                tracing::info!(event_id = %event.id, "Payment intent succeeded");
            }
            EventType::PaymentMethodAttached => {
                tracing::info!(event_id = %event.id, "Payment method attached");
            }
            EventType::Unknown(event_type) => {
                tracing::info!(
                    event_id = %event.id,
                    event_type = %event_type,
                    "Unhandled payment event"
                );
            }
        }

        WebhookAck::received()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::{EventObject, PaymentIntentObject, PaymentMethodObject};

    fn intent_event() -> PaymentEvent {
        PaymentEvent {
            id: "evt_1".to_string(),
            event_type: EventType::PaymentIntentSucceeded,
            data: EventObject::PaymentIntent(PaymentIntentObject {
                id: "pi_1".to_string(),
                amount: Some(1999),
                currency: Some("usd".to_string()),
                status: Some("succeeded".to_string()),
            }),
        }
    }

    #[test]
    fn payment_intent_succeeded_is_acknowledged() {
        let ack = EventDispatcher::new().dispatch(&intent_event());
        assert!(ack.received);
    }

    #[test]
    fn payment_method_attached_is_acknowledged() {
        let event = PaymentEvent {
            id: "evt_2".to_string(),
            event_type: EventType::PaymentMethodAttached,
            data: EventObject::PaymentMethod(PaymentMethodObject {
                id: "pm_1".to_string(),
                customer: None,
                method_type: Some("card".to_string()),
            }),
        };

        let ack = EventDispatcher::new().dispatch(&event);
        assert!(ack.received);
    }

    #[test]
    fn unknown_event_type_is_acknowledged_not_rejected() {
        let event = PaymentEvent {
            id: "evt_3".to_string(),
            event_type: EventType::Unknown("foo.bar".to_string()),
            data: EventObject::Unknown {
                raw: serde_json::json!({"anything": true}),
            },
        };

        let ack = EventDispatcher::new().dispatch(&event);
        assert!(ack.received);
    }

    #[test]
    fn ack_serializes_to_the_wire_shape() {
        let ack = EventDispatcher::new().dispatch(&intent_event());
        let json = serde_json::to_value(ack).unwrap();
        assert_eq!(json, serde_json::json!({"received": true}));
    }
}
