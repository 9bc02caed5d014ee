//! Response DTOs for session endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::auth::Role;
use crate::domain::session::SessionRecord;

/// Body returned by `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The issued session id (also delivered via cookie).
    pub session_id: String,

    /// Identity the session was issued for.
    pub user_id: String,

    /// Role of the identity.
    pub role: Role,
}

impl From<&SessionRecord> for LoginResponse {
    fn from(record: &SessionRecord) -> Self {
        Self {
            session_id: record.id.to_string(),
            user_id: record.identity.user_id.clone(),
            role: record.identity.role,
        }
    }
}

/// Body returned by `GET /auth/session` and the admin session lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Identity the session belongs to.
    pub user_id: String,

    /// Role of the identity.
    pub role: Role,

    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

impl From<&SessionRecord> for SessionView {
    fn from(record: &SessionRecord) -> Self {
        Self {
            user_id: record.identity.user_id.clone(),
            role: record.identity.role,
            created_at: record.created_at,
        }
    }
}

/// Body returned by `POST /auth/logout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    /// Always true; session destruction is best-effort.
    pub logged_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::Identity;

    #[test]
    fn login_response_serializes_camel_case() {
        let record = SessionRecord::new(Identity::new("user-1", Role::User));
        let json = serde_json::to_value(LoginResponse::from(&record)).unwrap();

        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["role"], "user");
        assert_eq!(json["sessionId"], record.id.to_string());
    }

    #[test]
    fn session_view_carries_creation_time() {
        let record = SessionRecord::new(Identity::new("user-1", Role::Admin));
        let view = SessionView::from(&record);

        assert_eq!(view.created_at, record.created_at);
        assert_eq!(view.role, Role::Admin);
    }
}
