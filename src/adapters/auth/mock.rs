//! Mock credential validator for testing.
//!
//! Implements the `TokenValidator` port without any real token parsing,
//! so tests can mint credentials as plain strings.
//!
//! # Example
//!
//! ```ignore
//! use ledgergate::adapters::auth::MockTokenValidator;
//! use ledgergate::domain::auth::{Identity, Role};
//!
//! let validator = MockTokenValidator::new()
//!     .with_identity("abc123", Identity::new("user-1", Role::User));
//!
//! let identity = validator.validate("abc123").await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::auth::{AuthError, Identity, Role};
use crate::ports::TokenValidator;

/// Mock token validator backed by a token table.
///
/// Tokens not in the table return `InvalidCredential`.
#[derive(Debug, Default)]
pub struct MockTokenValidator {
    /// Map of accepted tokens to their identities.
    tokens: RwLock<HashMap<String, Identity>>,

    /// Optional error returned for every validation (for error-path tests).
    force_error: RwLock<Option<AuthError>>,
}

impl MockTokenValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `token` and returns `identity` for it.
    pub fn with_identity(self, token: impl Into<String>, identity: Identity) -> Self {
        self.tokens.write().unwrap().insert(token.into(), identity);
        self
    }

    /// Accepts `token` for a user-role identity with the given id.
    pub fn with_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.with_identity(token, Identity::new(user_id, Role::User))
    }

    /// Accepts `token` for an admin-role identity with the given id.
    pub fn with_admin(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.with_identity(token, Identity::new(user_id, Role::Admin))
    }

    /// Forces every validation to return `error`.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl TokenValidator for MockTokenValidator {
    async fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_returns_configured_identity() {
        let validator = MockTokenValidator::new().with_user("tok", "user-9");

        let identity = validator.validate("tok").await.unwrap();

        assert_eq!(identity.user_id, "user-9");
        assert_eq!(identity.role, Role::User);
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let validator = MockTokenValidator::new();
        assert_eq!(
            validator.validate("nope").await,
            Err(AuthError::InvalidCredential)
        );
    }

    #[tokio::test]
    async fn forced_error_overrides_table() {
        let validator = MockTokenValidator::new()
            .with_user("tok", "user-9")
            .with_error(AuthError::InvalidCredential);

        assert_eq!(
            validator.validate("tok").await,
            Err(AuthError::InvalidCredential)
        );
    }

    #[tokio::test]
    async fn admin_helper_grants_admin_role() {
        let validator = MockTokenValidator::new().with_admin("root", "admin-1");
        let identity = validator.validate("root").await.unwrap();
        assert_eq!(identity.role, Role::Admin);
    }
}
