//! Login and logout against the credential list

use std::sync::Arc;

use docgate_core::Session;
use docgate_session::SessionStore;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::error::AuthError;
use crate::source::CredentialSource;

/// Compute the lowercase hex SHA-256 digest of a password
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verifies submitted credentials and owns session writes.
///
/// This is the only component that writes the session store; everything
/// else reads it. Both collaborators are injected, so the login path can be
/// exercised against an in-memory store and a scripted credential source.
pub struct Authenticator {
    source: Arc<dyn CredentialSource>,
    store: Arc<dyn SessionStore>,
}

impl Authenticator {
    pub fn new(source: Arc<dyn CredentialSource>, store: Arc<dyn SessionStore>) -> Self {
        Self { source, store }
    }

    /// Read the current session without giving out write access
    pub async fn session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.store.load().await?)
    }

    /// Attempt a login with the submitted username and plaintext password.
    ///
    /// The password digest is compared against the fetched list with plain
    /// string equality: case-sensitive and not constant-time, matching the
    /// published list format. The list is re-fetched on every attempt.
    ///
    /// On success the whole session record is persisted before this returns;
    /// on any failure the store is left untouched. Callers refresh the UI
    /// themselves after awaiting the outcome. Overlapping calls are not
    /// cancelled: whichever completes last determines the stored session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let digest = sha256_hex(password);

        let users = self.source.load_users().await.inspect_err(|e| {
            warn!("Login for {} aborted, credential source failed: {}", username, e);
        })?;

        // First match wins; duplicate usernames are never rejected.
        let matched = users
            .iter()
            .find(|record| record.username == username && record.password == digest);

        match matched {
            Some(record) => {
                let session = Session::new(username, record.group.clone());
                self.store.save(&session).await?;
                info!("User {} logged in (group: {})", session.user, session.group);
                Ok(session)
            }
            None => {
                warn!("Failed login attempt for user: {}", username);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Drop the current session, if any.
    ///
    /// Clears the whole record at once; succeeds even when nobody is logged
    /// in. Callers refresh the UI afterward.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.clear().await?;
        info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::UserRecord;
    use async_trait::async_trait;
    use docgate_session::{MemorySessionStore, SessionStore};

    struct FixedSource(Vec<UserRecord>);

    #[async_trait]
    impl CredentialSource for FixedSource {
        async fn load_users(&self) -> Result<Vec<UserRecord>, AuthError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CredentialSource for FailingSource {
        async fn load_users(&self) -> Result<Vec<UserRecord>, AuthError> {
            Err(serde_json::from_str::<Vec<UserRecord>>("not json").unwrap_err().into())
        }
    }

    fn init_tracing() {
        use tracing_subscriber::EnvFilter;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn alice_list() -> Vec<UserRecord> {
        vec![UserRecord {
            username: "alice".to_string(),
            password: sha256_hex("secret"),
            group: "admin,editor".to_string(),
        }]
    }

    fn authenticator(source: impl CredentialSource + 'static) -> (Authenticator, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        (Authenticator::new(Arc::new(source), store.clone()), store)
    }

    #[test]
    fn digest_is_lowercase_hex_sha256() {
        assert_eq!(
            sha256_hex("secret"),
            "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
        );
    }

    #[tokio::test]
    async fn correct_password_creates_session() {
        init_tracing();
        let (auth, store) = authenticator(FixedSource(alice_list()));

        let session = auth.login("alice", "secret").await.unwrap();
        assert_eq!(session, Session::new("alice", "admin,editor"));
        assert_eq!(store.load().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn wrong_password_leaves_store_untouched() {
        let (auth, store) = authenticator(FixedSource(alice_list()));

        let err = auth.login("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_user_is_invalid_credentials() {
        let (auth, _) = authenticator(FixedSource(alice_list()));

        let err = auth.login("mallory", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn source_failure_aborts_without_session_write() {
        let (auth, store) = authenticator(FailingSource);

        let err = auth.login("alice", "secret").await.unwrap_err();
        assert!(err.is_source_fault());
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn first_matching_record_wins_on_duplicates() {
        let mut users = alice_list();
        users.push(UserRecord {
            username: "alice".to_string(),
            password: sha256_hex("secret"),
            group: "viewer".to_string(),
        });
        let (auth, _) = authenticator(FixedSource(users));

        let session = auth.login("alice", "secret").await.unwrap();
        assert_eq!(session.group, "admin,editor");
    }

    #[tokio::test]
    async fn later_login_overwrites_earlier_session() {
        let mut users = alice_list();
        users.push(UserRecord {
            username: "bob".to_string(),
            password: sha256_hex("hunter2"),
            group: "viewer".to_string(),
        });
        let (auth, store) = authenticator(FixedSource(users));

        auth.login("alice", "secret").await.unwrap();
        auth.login("bob", "hunter2").await.unwrap();

        let session = store.load().await.unwrap().unwrap();
        assert_eq!(session, Session::new("bob", "viewer"));
    }

    #[tokio::test]
    async fn logout_clears_any_state() {
        let (auth, store) = authenticator(FixedSource(alice_list()));

        auth.logout().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);

        auth.login("alice", "secret").await.unwrap();
        auth.logout().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}
