//! Docgate Session Persistence
//!
//! This crate provides the durable session record for docgate, behind a
//! backend trait with file-backed and in-memory implementations.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::SessionError;
pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use store::SessionStore;
