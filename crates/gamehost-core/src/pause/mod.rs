//! Cross-document pause protocol module.
//!
//! The host tells the embedded program to freeze or unfreeze its internal
//! clock by posting one-way messages into the embedded frame. This module
//! contains the signal shape, the send-only channel capability, and the
//! bridge that re-synchronizes pause state whenever the live document or
//! the blocking-overlay visibility changes.

mod bridge;

pub use bridge::{FrameChannel, PAUSE_MESSAGE_TYPE, PauseBridge, PauseSignal};
