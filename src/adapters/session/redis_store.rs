//! Redis-backed session store.
//!
//! Implements the `SessionStore` port over Redis. Records are stored as
//! JSON under `session:<uuid>` keys with a configured TTL, so abandoned
//! sessions expire without a reaper.
//!
//! Concurrent writes to the same session id are last-write-wins; Redis
//! applies commands in arrival order and no locking is performed.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::config::RedisConfig;
use crate::domain::auth::Identity;
use crate::domain::session::{SessionError, SessionId, SessionRecord};
use crate::ports::SessionStore;

/// Key namespace for session records.
const KEY_PREFIX: &str = "session:";

/// Redis session store.
pub struct RedisSessionStore {
    conn: ConnectionManager,
    ttl_secs: u64,
}

impl RedisSessionStore {
    /// Connect to Redis using the application configuration.
    pub async fn connect(config: &RedisConfig) -> Result<Self, SessionError> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| SessionError::store_unavailable(e.to_string()))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| SessionError::store_unavailable(e.to_string()))?;

        Ok(Self {
            conn,
            ttl_secs: config.session_ttl_secs,
        })
    }

    /// Build a store from an existing connection (used by tests against a
    /// local Redis).
    pub fn with_connection(conn: ConnectionManager, ttl_secs: u64) -> Self {
        Self { conn, ttl_secs }
    }

    fn key(id: &SessionId) -> String {
        format!("{}{}", KEY_PREFIX, id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, identity: Identity) -> Result<SessionRecord, SessionError> {
        let record = SessionRecord::new(identity);
        let json = serde_json::to_string(&record)
            .map_err(|e| SessionError::store_unavailable(e.to_string()))?;

        let mut conn = self.conn.clone();
        let _: () = conn
            .set_ex(Self::key(&record.id), json, self.ttl_secs)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to persist session record");
                SessionError::store_unavailable(e.to_string())
            })?;

        tracing::debug!(session_id = %record.id, "Session created");
        Ok(record)
    }

    async fn read(&self, id: &SessionId) -> Result<SessionRecord, SessionError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(Self::key(id)).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read session record");
            SessionError::store_unavailable(e.to_string())
        })?;

        let json = value.ok_or(SessionError::NoActiveSession)?;

        serde_json::from_str(&json).map_err(|e| {
            tracing::error!(session_id = %id, error = %e, "Corrupt session record");
            SessionError::store_unavailable(e.to_string())
        })
    }

    async fn destroy(&self, id: &SessionId) -> Result<(), SessionError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(Self::key(id)).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to delete session record");
            SessionError::store_unavailable(e.to_string())
        })?;

        tracing::debug!(session_id = %id, "Session destroyed");
        Ok(())
    }
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
