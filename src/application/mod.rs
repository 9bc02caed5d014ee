//! Application layer - use-case orchestration over the ports.

pub mod handlers;

mod dispatcher;

pub use dispatcher::{EventDispatcher, WebhookAck};
