//! Authentication and authorization errors.
//!
//! These errors are **domain-centric** - they describe what went wrong
//! from the application's perspective, not the token library's.

use thiserror::Error;

/// Errors raised while authenticating or authorizing a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The Authorization header is absent, empty, or not a `Bearer <token>` pair.
    #[error("Missing or malformed credential")]
    MissingCredential,

    /// The credential failed signature, expiry, or claim validation.
    #[error("Invalid or expired credential")]
    InvalidCredential,

    /// The caller is authenticated but its role does not satisfy the operation.
    #[error("Insufficient role for this operation")]
    Forbidden,
}

impl AuthError {
    /// Returns true if this error maps to an unauthorized (401) response.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthError::MissingCredential | AuthError::InvalidCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_displays_correctly() {
        assert_eq!(
            format!("{}", AuthError::MissingCredential),
            "Missing or malformed credential"
        );
    }

    #[test]
    fn invalid_credential_displays_correctly() {
        assert_eq!(
            format!("{}", AuthError::InvalidCredential),
            "Invalid or expired credential"
        );
    }

    #[test]
    fn unauthorized_classification() {
        assert!(AuthError::MissingCredential.is_unauthorized());
        assert!(AuthError::InvalidCredential.is_unauthorized());
        assert!(!AuthError::Forbidden.is_unauthorized());
    }
}
