//! JWT adapter for credential validation.
//!
//! Implements the `TokenValidator` port for HS256 tokens signed with the
//! server-held secret. Validation covers:
//!
//! 1. Signature against the signing secret
//! 2. Expiry (`exp`)
//! 3. Issuer (`iss`) when one is configured
//! 4. Mapping `sub` and `role` claims to the domain [`Identity`]
//!
//! Every verification failure collapses to `AuthError::InvalidCredential`;
//! the distinction between expired and badly-signed tokens is kept in the
//! logs only.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::auth::{AuthError, Identity, Role};
use crate::ports::TokenValidator;

/// Configuration for the JWT validator.
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared signing secret used to verify token signatures.
    signing_secret: SecretString,

    /// Expected issuer claim; validated only when set.
    issuer: Option<String>,
}

impl JwtConfig {
    /// Create a new configuration with the signing secret.
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: SecretString::new(signing_secret.into()),
            issuer: None,
        }
    }

    /// Require tokens to carry this issuer claim.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }
}

/// Claims this service reads from access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject - the user ID.
    sub: String,

    /// Role granted to the subject.
    role: String,

    /// Expiry timestamp (Unix epoch seconds).
    exp: i64,

    /// Issuer, when the signing service sets one.
    #[serde(default)]
    iss: Option<String>,
}

/// JWT credential validator.
///
/// This is the production implementation of `TokenValidator`. It is a pure
/// function of the token plus the configured key; it performs no I/O.
pub struct JwtTokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenValidator {
    /// Create a validator from configuration.
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key =
            DecodingKey::from_secret(config.signing_secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl TokenValidator for JwtTokenValidator {
    async fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Credential expired");
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Invalid issuer in credential");
                    }
                    _ => {
                        tracing::warn!(error = %e, "Credential validation failed");
                    }
                }
                AuthError::InvalidCredential
            })?;

        let claims = token_data.claims;

        // Roles are a closed set; a token minted with anything else is bad.
        let role: Role = claims.role.parse().map_err(|_| {
            tracing::warn!(role = %claims.role, "Unknown role claim in credential");
            AuthError::InvalidCredential
        })?;

        Ok(Identity::new(claims.sub, role))
    }
}

impl std::fmt::Debug for JwtTokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenValidator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const TEST_SECRET: &str = "unit-test-signing-secret-0123456789abcdef";

    fn sign_token(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(role: &str, exp_offset_secs: i64) -> Claims {
        Claims {
            sub: "user-123".to_string(),
            role: role.to_string(),
            exp: chrono::Utc::now().timestamp() + exp_offset_secs,
            iss: None,
        }
    }

    fn validator() -> JwtTokenValidator {
        JwtTokenValidator::new(JwtConfig::new(TEST_SECRET))
    }

    #[tokio::test]
    async fn valid_token_yields_identity() {
        let token = sign_token(&claims("user", 3600), TEST_SECRET);

        let identity = validator().validate(&token).await.unwrap();

        assert_eq!(identity.user_id, "user-123");
        assert_eq!(identity.role, Role::User);
    }

    #[tokio::test]
    async fn admin_role_claim_maps_to_admin() {
        let token = sign_token(&claims("admin", 3600), TEST_SECRET);

        let identity = validator().validate(&token).await.unwrap();

        assert_eq!(identity.role, Role::Admin);
    }

    #[tokio::test]
    async fn expired_token_is_invalid() {
        let token = sign_token(&claims("user", -3600), TEST_SECRET);

        let result = validator().validate(&token).await;

        assert_eq!(result, Err(AuthError::InvalidCredential));
    }

    #[tokio::test]
    async fn wrong_signing_secret_is_invalid() {
        let token = sign_token(&claims("user", 3600), "some-other-secret-value");

        let result = validator().validate(&token).await;

        assert_eq!(result, Err(AuthError::InvalidCredential));
    }

    #[tokio::test]
    async fn unknown_role_claim_is_invalid() {
        let token = sign_token(&claims("superuser", 3600), TEST_SECRET);

        let result = validator().validate(&token).await;

        assert_eq!(result, Err(AuthError::InvalidCredential));
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let result = validator().validate("not-a-jwt").await;
        assert_eq!(result, Err(AuthError::InvalidCredential));
    }

    #[tokio::test]
    async fn issuer_is_enforced_when_configured() {
        let validator =
            JwtTokenValidator::new(JwtConfig::new(TEST_SECRET).with_issuer("ledgergate"));

        let mut without_issuer = claims("user", 3600);
        without_issuer.iss = None;
        let token = sign_token(&without_issuer, TEST_SECRET);
        assert_eq!(
            validator.validate(&token).await,
            Err(AuthError::InvalidCredential)
        );

        let mut with_issuer = claims("user", 3600);
        with_issuer.iss = Some("ledgergate".to_string());
        let token = sign_token(&with_issuer, TEST_SECRET);
        assert!(validator.validate(&token).await.is_ok());
    }

    #[test]
    fn jwt_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwtTokenValidator>();
    }
}
