//! Webhook signature verification and event decoding.
//!
//! Inbound webhooks bypass the bearer-token path entirely: trust comes
//! from an HMAC-SHA256 signature of the raw payload under the shared
//! webhook secret. The signature header carries the hex-encoded MAC; when
//! the processor sends multiple signature headers, the HTTP layer passes
//! the first.
//!
//! # Security
//!
//! - Signature comparison uses `subtle::ConstantTimeEq`; a short-circuiting
//!   byte comparison is never acceptable here
//! - Verification is a pure function of (payload, signature, secret)
//!
//! Duplicate delivery of the same event id is not deduplicated.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::domain::payment::{
    EventObject, EventType, PaymentEvent, PaymentIntentObject, PaymentMethodObject,
};

type HmacSha256 = Hmac<Sha256>;

/// Errors raised while verifying a webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// No signature header accompanied the payload.
    #[error("Missing signature header")]
    MissingSignature,

    /// The signature header is not valid hex.
    #[error("Invalid signature encoding: {0}")]
    InvalidSignatureFormat(String),

    /// The signature does not match the payload under the shared secret.
    #[error("Signature verification failed")]
    SignatureMismatch,

    /// The payload is not a well-formed event.
    #[error("Malformed event payload: {0}")]
    MalformedPayload(String),
}

/// Raw webhook event envelope as received from the processor.
#[derive(Debug, Clone, Deserialize)]
struct WireEvent {
    /// Unique event identifier (evt_...).
    id: String,

    /// Dot-namespaced event type.
    #[serde(rename = "type")]
    event_type: String,

    /// Event payload container.
    data: WireEventData,
}

#[derive(Debug, Clone, Deserialize)]
struct WireEventData {
    /// The object affected by this event.
    object: serde_json::Value,
}

/// Verifies webhook signatures and decodes payloads into typed events.
pub struct WebhookVerifier {
    secret: SecretString,
}

impl WebhookVerifier {
    /// Create a verifier holding the shared webhook secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }

    /// Verify `signature` against `payload` and decode the event.
    ///
    /// The signature must be the hex-encoded HMAC-SHA256 of the raw payload
    /// bytes under the shared secret. On success the payload is parsed into
    /// a [`PaymentEvent`]; unknown event types decode to the catch-all
    /// variant rather than failing.
    pub fn verify(&self, payload: &[u8], signature: &str) -> Result<PaymentEvent, WebhookError> {
        let provided = hex_decode(signature.trim())
            .ok_or_else(|| WebhookError::InvalidSignatureFormat(signature.trim().to_string()))?;

        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload);
        let expected = mac.finalize().into_bytes();

        if expected.as_slice().ct_eq(&provided).unwrap_u8() != 1 {
            tracing::warn!("Invalid webhook signature");
            return Err(WebhookError::SignatureMismatch);
        }

        let event = parse_event(payload)?;

        tracing::info!(
            event_id = %event.id,
            event_type = %event.event_type.as_str(),
            "Webhook signature verified"
        );

        Ok(event)
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier").finish_non_exhaustive()
    }
}

/// Parse a verified payload into a typed event.
fn parse_event(payload: &[u8]) -> Result<PaymentEvent, WebhookError> {
    let wire: WireEvent = serde_json::from_slice(payload).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse webhook payload");
        WebhookError::MalformedPayload(e.to_string())
    })?;

    let event_type = EventType::parse(&wire.event_type);

    let data = match &event_type {
        EventType::PaymentIntentSucceeded => {
            let intent: PaymentIntentObject = serde_json::from_value(wire.data.object)
                .map_err(|e| WebhookError::MalformedPayload(format!("payment intent: {}", e)))?;
            EventObject::PaymentIntent(intent)
        }
        EventType::PaymentMethodAttached => {
            let method: PaymentMethodObject = serde_json::from_value(wire.data.object)
                .map_err(|e| WebhookError::MalformedPayload(format!("payment method: {}", e)))?;
            EventObject::PaymentMethod(method)
        }
        EventType::Unknown(_) => EventObject::Unknown {
            raw: wire.data.object,
        },
    };

    Ok(PaymentEvent {
        id: wire.id,
        event_type,
        data,
    })
}

/// Decode a hex string to bytes.
fn hex_decode(hex: &str) -> Option<Vec<u8>> {
    if !hex.len().is_multiple_of(2) {
        return None;
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for i in (0..hex.len()).step_by(2) {
        let byte = u8::from_str_radix(&hex[i..i + 2], 16).ok()?;
        bytes.push(byte);
    }
    Some(bytes)
}

/// Encode bytes to hex string.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
