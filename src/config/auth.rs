//! Authentication configuration (JWT signing)

use serde::Deserialize;

use super::error::ValidationError;

/// Minimum accepted signing secret length, in bytes.
const MIN_SECRET_LEN: usize = 32;

/// Authentication configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to verify access token signatures
    pub jwt_secret: String,

    /// Expected issuer claim; unchecked when unset
    pub issuer: Option<String>,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_short_secret() {
        let config = AuthConfig {
            jwt_secret: "too-short".to_string(),
            issuer: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_secret() {
        let config = AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            issuer: Some("ledgergate".to_string()),
        };
        assert!(config.validate().is_ok());
    }
}
