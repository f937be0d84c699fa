//! Session store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session record error: {0}")]
    Record(#[from] serde_json::Error),
}
