//! Error types for the game host.

use crate::variant::VariantId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the game host orchestration layer.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum HostError {
    /// Variant retrieval failed (non-OK response, transport error, or empty body)
    #[error("Failed to load variant '{variant}': {message}")]
    Load { variant: VariantId, message: String },

    /// Remix failed (generative service error or malformed output)
    #[error("Remix failed: {message}")]
    Remix { message: String },

    /// Transport-level error reported by an adapter (HTTP client, channel)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Operation issued from a session state that does not allow it
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HostError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Load error for the given variant
    pub fn load(variant: VariantId, message: impl Into<String>) -> Self {
        Self::Load {
            variant,
            message: message.into(),
        }
    }

    /// Creates a Remix error
    pub fn remix(message: impl Into<String>) -> Self {
        Self::Remix {
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Load error
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// Check if this is a Remix error
    pub fn is_remix(&self) -> bool {
        matches!(self, Self::Remix { .. })
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is an InvalidState error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for HostError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HostError>`.
pub type Result<T> = std::result::Result<T, HostError>;
