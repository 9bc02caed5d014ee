//! Payment HTTP surface.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CancelSubscriptionRequest, CreateCheckoutSessionRequest, CreateSubscriptionRequest,
};
pub use handlers::PaymentAppState;
pub use routes::{payment_routes, webhook_routes};
