//! Core domain types for Showcase.
//!
//! This crate contains pure domain types with no IO and no rendering dependency.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod boundary;
mod failure;
pub mod ui;

pub use boundary::{BoundaryPhase, BoundaryState};
pub use failure::{NO_MESSAGE_PLACEHOLDER, RenderFailure};
pub use ui::{ScrollState, UiOptions};
