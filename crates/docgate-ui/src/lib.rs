//! Docgate UI Projection and Wiring
//!
//! This crate turns the current session into visible UI state and drives
//! the authenticator and access checks from page events. It never touches a
//! real DOM: the embedding page implements [`UiSurface`] and owns the
//! actual elements.

pub mod controller;
pub mod state;
pub mod surface;

pub use controller::UiController;
pub use state::{NavigationItem, UiState, render};
pub use surface::UiSurface;
