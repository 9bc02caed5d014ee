//! Adapters - implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT credential validation (plus a mock)
//! - `session` - Redis and in-memory session stores
//! - `stripe` - payment gateway pass-through and webhook verification
//! - `http` - axum routers, middleware, and error mapping

pub mod auth;
pub mod http;
pub mod session;
pub mod stripe;
