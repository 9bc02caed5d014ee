//! Token validation port.
//!
//! Defines the contract for verifying a bearer credential and extracting
//! the caller's identity. It is scheme-agnostic: the production adapter
//! verifies JWTs against the server signing key, and a mock exists for
//! tests.
//!
//! # Contract
//!
//! Implementations must:
//! - Verify the credential's signature against the server-held signing key
//! - Verify expiry
//! - Return `AuthError::InvalidCredential` for malformed, expired, or
//!   badly-signed credentials
//! - Be a pure function of the credential plus the signing key; no side
//!   effects

use async_trait::async_trait;

use crate::domain::auth::{AuthError, Identity};

/// Validates bearer credentials and extracts the caller's identity.
///
/// HTTP middleware uses this to turn `Authorization: Bearer <token>` into
/// an [`Identity`] before any business operation runs.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validate a credential and return the identity it encodes.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw credential (without the `Bearer ` prefix)
    ///
    /// # Returns
    ///
    /// * `Ok(Identity)` - Credential valid, identity extracted from claims
    /// * `Err(AuthError::InvalidCredential)` - Signature, expiry, or claim
    ///   validation failed
    async fn validate(&self, token: &str) -> Result<Identity, AuthError>;
}
