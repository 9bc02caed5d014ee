//! Identity and role types for the authentication layer.
//!
//! An `Identity` is the decoded result of a validated credential: a user
//! identifier plus a role. It is constructed fresh per request by the
//! `TokenValidator` port and discarded when the request ends; this layer
//! never persists it.
//!
//! Roles form a closed, enumerated permission set with a single superset
//! relation: `Admin` implies `User`. The relation is decided here, once,
//! and every call site goes through [`Role::satisfies`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AuthError;

/// Role carried by an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account holder.
    User,

    /// Administrative account; satisfies every requirement `User` does.
    Admin,
}

impl Role {
    /// Check whether this role satisfies a required role.
    ///
    /// `Admin` is the administrative superset: it satisfies both `Admin`
    /// and `User` requirements. `User` satisfies only `User`.
    pub fn satisfies(self, required: Role) -> bool {
        match (self, required) {
            (Role::Admin, _) => true,
            (Role::User, Role::User) => true,
            (Role::User, Role::Admin) => false,
        }
    }

    /// The wire representation of this role (as it appears in token claims).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a role string from token claims.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Authenticated identity extracted from a validated credential.
///
/// This is a **domain type** with no token-library dependencies. Any
/// credential scheme can populate it via the `TokenValidator` port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The unique user identifier from the credential's subject claim.
    pub user_id: String,

    /// Role granted to this identity.
    pub role: Role,
}

impl Identity {
    /// Creates a new identity.
    ///
    /// Typically called by a `TokenValidator` adapter after successfully
    /// verifying a credential.
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// Require that this identity's role satisfies `required`.
    ///
    /// Returns the identity on success so call sites can chain; fails with
    /// [`AuthError::Forbidden`] otherwise. Must run before any mutating
    /// business operation that declares a required role.
    pub fn require_role(&self, required: Role) -> Result<&Self, AuthError> {
        if self.role.satisfies(required) {
            Ok(self)
        } else {
            tracing::warn!(
                user_id = %self.user_id,
                role = %self.role,
                required = %required,
                "Role requirement not satisfied"
            );
            Err(AuthError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_satisfies_every_requirement() {
        assert!(Role::Admin.satisfies(Role::Admin));
        assert!(Role::Admin.satisfies(Role::User));
    }

    #[test]
    fn user_satisfies_only_user() {
        assert!(Role::User.satisfies(Role::User));
        assert!(!Role::User.satisfies(Role::Admin));
    }

    #[test]
    fn role_parses_known_strings() {
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    }

    #[test]
    fn role_rejects_unknown_strings() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("superuser".to_string()));
    }

    #[test]
    fn role_round_trips_through_as_str() {
        assert_eq!(Role::User.as_str().parse::<Role>(), Ok(Role::User));
        assert_eq!(Role::Admin.as_str().parse::<Role>(), Ok(Role::Admin));
    }

    #[test]
    fn require_role_returns_identity_when_satisfied() {
        let identity = Identity::new("user-123", Role::User);
        let result = identity.require_role(Role::User);
        assert_eq!(result.unwrap().user_id, "user-123");
    }

    #[test]
    fn require_role_fails_with_forbidden_when_not_satisfied() {
        let identity = Identity::new("user-123", Role::User);
        assert_eq!(identity.require_role(Role::Admin), Err(AuthError::Forbidden));
    }

    #[test]
    fn admin_identity_passes_user_requirement() {
        let identity = Identity::new("admin-1", Role::Admin);
        assert!(identity.require_role(Role::User).is_ok());
    }

    #[test]
    fn identity_serializes_role_lowercase() {
        let identity = Identity::new("u-1", Role::Admin);
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["user_id"], "u-1");
    }
}
