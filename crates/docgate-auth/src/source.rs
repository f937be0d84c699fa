//! Credential list source

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AuthError;

/// One record of the static credential list.
///
/// The `password` field holds the lowercase hex SHA-256 digest of the real
/// password, not the plaintext; the field name follows the published list
/// format. Username uniqueness is assumed but not enforced, so lookups take
/// the first match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub group: String,
}

/// Supplier of the known-user list
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Retrieve the full credential list.
    ///
    /// Called on every login attempt; implementations are not expected to
    /// cache between calls.
    async fn load_users(&self) -> Result<Vec<UserRecord>, AuthError>;
}

/// Credential source backed by an HTTP-hosted JSON list
pub struct HttpCredentialSource {
    client: Client,
    url: String,
}

impl HttpCredentialSource {
    /// Create a source fetching from the given URL
    pub fn new(url: impl Into<String>) -> Result<Self, AuthError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CredentialSource for HttpCredentialSource {
    async fn load_users(&self) -> Result<Vec<UserRecord>, AuthError> {
        debug!("Fetching credential list from {}", self.url);

        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let users: Vec<UserRecord> = serde_json::from_str(&body).inspect_err(|e| {
            warn!("Credential list at {} is not valid JSON: {}", self.url, e);
        })?;

        debug!("Loaded {} credential records", users.len());
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_list_parses_from_json() {
        let body = r#"[
            {"username": "alice", "password": "2bb80d53...", "group": "admin,editor"},
            {"username": "bob", "password": "5e884898...", "group": "viewer"}
        ]"#;

        let users: Vec<UserRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].group, "viewer");
    }
}
