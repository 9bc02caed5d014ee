//! Session identifier and record value objects.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::auth::Identity;

/// Unique identifier for a server-side session, delivered to the browser
/// via cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Server-held record linking a session id to an authenticated identity.
///
/// Created on login, read on each cookie-authenticated request, destroyed
/// on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Session identifier (the cookie value).
    pub id: SessionId,

    /// Identity the session was issued for.
    pub identity: Identity,

    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a fresh record for `identity` with a newly generated id.
    pub fn new(identity: Identity) -> Self {
        Self {
            id: SessionId::new(),
            identity,
            created_at: Utc::now(),
        }
    }
}
