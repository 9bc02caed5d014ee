//! Authentication domain types.
//!
//! - [`Identity`] / [`Role`] - the decoded result of a validated credential
//! - [`extract_bearer`] - Authorization header parsing
//! - [`AuthError`] - the authentication/authorization error taxonomy

mod credential;
mod error;
mod identity;

pub use credential::extract_bearer;
pub use error::AuthError;
pub use identity::{Identity, Role, UnknownRole};
