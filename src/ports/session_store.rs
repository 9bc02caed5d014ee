//! Session store port.
//!
//! Server-side persistence for cookie-backed sessions, independent of the
//! bearer-token path. Records are read and written per session id with no
//! cross-session coordination; sessions are never shared across identities.
//!
//! # Write policy
//!
//! Concurrent writes to the same session id are resolved last-write-wins.
//! Implementations perform no locking or version checks.

use async_trait::async_trait;

use crate::domain::auth::Identity;
use crate::domain::session::{SessionError, SessionId, SessionRecord};

/// Stores session records keyed by generated session id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Issue a new session for `identity`.
    ///
    /// Generates a fresh session id, persists the record, and returns it so
    /// the caller can set the cookie.
    async fn create(&self, identity: Identity) -> Result<SessionRecord, SessionError>;

    /// Look up the record for a session id.
    ///
    /// Returns `SessionError::NoActiveSession` when no record exists.
    async fn read(&self, id: &SessionId) -> Result<SessionRecord, SessionError>;

    /// Remove the record for a session id.
    ///
    /// Destroying an id with no record is not an error. Callers performing
    /// logout treat failures here as best-effort: the error is reported but
    /// the logout response still succeeds.
    async fn destroy(&self, id: &SessionId) -> Result<(), SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn SessionStore) {}
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<std::sync::Arc<dyn SessionStore>>();
    }
}
