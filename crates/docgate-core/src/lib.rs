//! Docgate Core Data Model
//!
//! This crate provides the shared types for docgate: the session record,
//! group-label matching, and configuration loading.

pub mod config;
pub mod session;

pub use config::{GateConfig, default_config_path};
pub use session::Session;
