//! Payment domain types.
//!
//! Only verified webhook events are modeled here; gateway responses pass
//! through this service verbatim and never become domain objects.

mod event;

pub use event::{EventObject, EventType, PaymentEvent, PaymentIntentObject, PaymentMethodObject};
