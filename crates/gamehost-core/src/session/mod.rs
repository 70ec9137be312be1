//! Session domain module.
//!
//! This module contains the live-session model and the controller state
//! machine that governs which document is currently live and under what
//! loading/error state.
//!
//! # Module Structure
//!
//! - `model`: Live session model (`LiveSession`, `LoadState`, `GenerationToken`)
//! - `controller`: Session lifecycle management (`SessionController`)

mod controller;
mod model;


// Re-export public API
pub use controller::{ApplyOutcome, SessionController};
pub use model::{GenerationToken, LiveSession, LoadState};
