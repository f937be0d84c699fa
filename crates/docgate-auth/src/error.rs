//! Authentication error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No record matched the submitted username and password digest
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The credential list could not be fetched
    #[error("Credential fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The credential list could not be parsed
    #[error("Credential parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Session store error: {0}")]
    Session(#[from] docgate_session::SessionError),
}

impl AuthError {
    /// Whether this failure is a credential-source fault rather than a
    /// rejected login.
    ///
    /// At the UI surface both look the same (a failed login); the
    /// distinction only matters for diagnostics.
    pub fn is_source_fault(&self) -> bool {
        matches!(self, AuthError::Fetch(_) | AuthError::Parse(_))
    }
}
