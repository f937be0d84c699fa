//! File-backed session store

use async_trait::async_trait;
use docgate_core::Session;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::error::SessionError;
use crate::store::SessionStore;

/// File-backed session store
///
/// Persists the session as one JSON document at a fixed path, so it survives
/// reloads of the embedding page and is shared by everything pointing at the
/// same path. An absent file is the logged-out state.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a file-backed store at the given path, creating parent
    /// directories as needed
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        info!("Initialized session store at {:?}", path);

        Ok(Self { path })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Io(e)),
        };

        let session: Session = serde_json::from_slice(&data)?;
        Ok(Some(session))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        let data = serde_json::to_vec(session)?;

        // Write to a temp file then rename, so a crash mid-write never
        // leaves a half-written record behind.
        let temp = self.temp_path();
        fs::write(&temp, &data).await?;
        fs::rename(&temp, &self.path).await?;

        debug!("Saved session for {} to {:?}", session.user, self.path);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Cleared session at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(e)),
        }
    }
}
