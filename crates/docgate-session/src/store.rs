//! Session store trait

use async_trait::async_trait;
use docgate_core::Session;

use crate::error::SessionError;

/// Durable session store
///
/// Implementations hold at most one session per store and persist it as a
/// single composite value: `save` replaces the whole record, `clear` removes
/// all of it at once. There is no partial state a reader can observe.
///
/// The store has a single writer category (the authenticator, via `save` and
/// `clear`); everything else only reads. There is no locking beyond what an
/// implementation needs internally, which is acceptable because callers run
/// on one cooperative executor: overlapping logins interleave rather than
/// race, and the later completion wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the current session, if any
    async fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Replace the current session with the given one
    async fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove the current session; a no-op when none exists
    async fn clear(&self) -> Result<(), SessionError>;
}
