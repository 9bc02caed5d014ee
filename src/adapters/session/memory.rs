//! In-memory session store.
//!
//! Stores session records in a process-local map. Useful for testing and
//! development; the Redis adapter is the production implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::Identity;
use crate::domain::session::{SessionError, SessionId, SessionRecord};
use crate::ports::SessionStore;

/// In-memory store for session records.
///
/// Writes to the same id overwrite whatever was there (last-write-wins),
/// matching the Redis adapter's behavior.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    records: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored records (useful for tests).
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Number of active sessions.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, identity: Identity) -> Result<SessionRecord, SessionError> {
        let record = SessionRecord::new(identity);
        self.records
            .write()
            .await
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn read(&self, id: &SessionId) -> Result<SessionRecord, SessionError> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(SessionError::NoActiveSession)
    }

    async fn destroy(&self, id: &SessionId) -> Result<(), SessionError> {
        self.records.write().await.remove(id);
        Ok(())
    }
}
