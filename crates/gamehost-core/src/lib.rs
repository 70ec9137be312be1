//! Game host orchestration core.
//!
//! Hosts a self-contained, previously generated game document inside a
//! sandboxed embedded frame, switches between pre-built variants, and
//! hot-swaps remixed documents produced by a generative content service,
//! all without reloading the outer application.
//!
//! The crate is the domain layer: all I/O crosses trait seams
//! ([`variant::DocumentFetcher`], [`remix::GenerativeClient`],
//! [`pause::FrameChannel`]) so adapters and tests can substitute their own
//! implementations.

pub mod document;
pub mod error;
pub mod pause;
pub mod remix;
pub mod session;
pub mod variant;

// Re-export common error type
pub use error::{HostError, Result};
