//! Session domain types.
//!
//! A session is the cookie-backed counterpart to the bearer-token path:
//! server-side state linking a generated session id to an [`Identity`].
//!
//! [`Identity`]: crate::domain::auth::Identity

mod record;

pub use record::{SessionId, SessionRecord};

use thiserror::Error;

/// Errors raised by session store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No record exists for the presented session id.
    #[error("No active session")]
    NoActiveSession,

    /// The backing store could not be reached or returned corrupt data.
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),
}

impl SessionError {
    /// Creates a store-unavailable error with a message.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_active_session_displays_correctly() {
        assert_eq!(format!("{}", SessionError::NoActiveSession), "No active session");
    }

    #[test]
    fn store_unavailable_carries_reason() {
        let err = SessionError::store_unavailable("connection refused");
        assert_eq!(
            format!("{}", err),
            "Session store unavailable: connection refused"
        );
    }
}
