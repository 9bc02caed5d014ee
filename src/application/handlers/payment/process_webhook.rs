//! Process-webhook use case.
//!
//! Webhook requests bypass the bearer-token path: verification of the
//! payload signature is the entire authentication step. Once verified,
//! the event goes to the dispatcher and the processor gets its
//! acknowledgment.

use std::sync::Arc;

use crate::adapters::stripe::WebhookVerifier;
use crate::application::{EventDispatcher, WebhookAck};

use super::PaymentFlowError;

/// Command carrying a raw webhook delivery.
#[derive(Debug, Clone)]
pub struct ProcessWebhookCommand {
    /// Raw request body, exactly as received.
    pub payload: Vec<u8>,

    /// Signature header value (first value when several were sent).
    pub signature: String,
}

/// Handler for [`ProcessWebhookCommand`].
pub struct ProcessWebhookHandler {
    verifier: Arc<WebhookVerifier>,
    dispatcher: EventDispatcher,
}

impl ProcessWebhookHandler {
    /// Creates the handler with its verifier dependency.
    pub fn new(verifier: Arc<WebhookVerifier>) -> Self {
        Self {
            verifier,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Verify the delivery, dispatch the event, and acknowledge.
    pub fn handle(&self, cmd: ProcessWebhookCommand) -> Result<WebhookAck, PaymentFlowError> {
        let event = self.verifier.verify(&cmd.payload, &cmd.signature)?;
        Ok(self.dispatcher.dispatch(&event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stripe::hex_encode;
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    const TEST_SECRET: &str = "whsec_test";

    fn sign(payload: &[u8]) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(TEST_SECRET.as_bytes()).unwrap();
        mac.update(payload);
        hex_encode(&mac.finalize().into_bytes())
    }

    fn handler() -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(Arc::new(WebhookVerifier::new(TEST_SECRET)))
    }

    fn event_payload() -> &'static [u8] {
        br#"{
            "id": "evt_1",
            "type": "payment_intent.succeeded",
            "data": {"object": {"id": "pi_1", "amount": 1999, "currency": "usd"}}
        }"#
    }

    #[test]
    fn verified_event_is_acknowledged() {
        let payload = event_payload();
        let ack = handler()
            .handle(ProcessWebhookCommand {
                payload: payload.to_vec(),
                signature: sign(payload),
            })
            .unwrap();

        assert!(ack.received);
    }

    #[test]
    fn bad_signature_fails_with_webhook_error_prefix() {
        let payload = event_payload();
        let err = handler()
            .handle(ProcessWebhookCommand {
                payload: payload.to_vec(),
                signature: "deadbeef".to_string(),
            })
            .unwrap_err();

        assert!(format!("{}", err).starts_with("Webhook Error:"));
    }

    #[test]
    fn unknown_event_type_still_acknowledges() {
        let payload = br#"{"id": "evt_9", "type": "foo.bar", "data": {"object": {}}}"#;
        let ack = handler()
            .handle(ProcessWebhookCommand {
                payload: payload.to_vec(),
                signature: sign(payload),
            })
            .unwrap();

        assert!(ack.received);
    }

    #[test]
    fn duplicate_delivery_is_not_deduplicated() {
        let payload = event_payload();
        let cmd = ProcessWebhookCommand {
            payload: payload.to_vec(),
            signature: sign(payload),
        };

        let first = handler().handle(cmd.clone()).unwrap();
        let second = handler().handle(cmd).unwrap();

        assert!(first.received);
        assert!(second.received);
    }
}
