//! In-memory session store

use async_trait::async_trait;
use docgate_core::Session;
use parking_lot::RwLock;

use crate::error::SessionError;
use crate::store::SessionStore;

/// In-memory session store
///
/// Holds the session for the lifetime of the process only. Used by tests and
/// by embeddings that do not want the session to survive a restart.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.session.read().clone())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.session.write() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.session.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty_and_clears_fully() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        store.save(&Session::new("alice", "admin")).await.unwrap();
        assert!(store.load().await.unwrap().is_some());

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}
