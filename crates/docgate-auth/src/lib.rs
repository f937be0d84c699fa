//! Docgate Authentication and Access Control
//!
//! This crate provides credential verification against a fetched static
//! user list, session creation/teardown, and the group-gated page access
//! decision.

pub mod access;
pub mod authenticator;
pub mod error;
pub mod source;

pub use access::{AccessDecision, PageAccessRule, check_access};
pub use authenticator::{Authenticator, sha256_hex};
pub use error::AuthError;
pub use source::{CredentialSource, HttpCredentialSource, UserRecord};
