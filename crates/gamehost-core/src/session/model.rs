//! Live session domain model.

use crate::variant::VariantId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token identifying a specific live document instance.
///
/// Minted monotonically by the session controller every time a document is
/// published, and carried through the pause protocol so that stale async
/// results and stale cross-document messages can be discarded exactly
/// (two different documents never share a token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GenerationToken(u64);

impl GenerationToken {
    /// Wraps a raw counter value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GenerationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Loading/error state of the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    /// No variant selected yet
    Idle,
    /// Variant retrieval/preparation in flight
    Loading,
    /// A document is live and displayable
    Ready,
    /// Remix in flight; the prior Ready document remains displayed underneath
    Remixing,
    /// Load error; no displayable document
    Failed,
}

/// The single live session owned by the session controller.
///
/// Exactly one `LiveSession` exists at a time; it is replaced wholesale on
/// every variant switch or successful remix. Invariant: `document` is `Some`
/// iff `load_state` is `Ready` or `Remixing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSession {
    /// The currently selected variant, if any
    pub active_variant: Option<VariantId>,
    /// The live document content, present only while displayable
    pub document: Option<String>,
    /// Current loading/error state
    pub load_state: LoadState,
    /// Generation token of the live document, minted per publish
    pub generation: Option<GenerationToken>,
    /// Last pause state commanded over the pause bridge
    pub is_paused: bool,
}

impl LiveSession {
    /// Session before any variant has been selected.
    pub fn idle() -> Self {
        Self {
            active_variant: None,
            document: None,
            load_state: LoadState::Idle,
            generation: None,
            is_paused: false,
        }
    }

    /// Session while a variant switch is in flight.
    pub fn loading(variant: VariantId) -> Self {
        Self {
            active_variant: Some(variant),
            document: None,
            load_state: LoadState::Loading,
            generation: None,
            is_paused: false,
        }
    }

    /// Session with a live, displayable document.
    pub fn ready(
        variant: VariantId,
        document: String,
        generation: GenerationToken,
        is_paused: bool,
    ) -> Self {
        Self {
            active_variant: Some(variant),
            document: Some(document),
            load_state: LoadState::Ready,
            generation: Some(generation),
            is_paused,
        }
    }

    /// Session while a remix is in flight; the prior document stays live.
    pub fn remixing(
        variant: VariantId,
        document: String,
        generation: GenerationToken,
        is_paused: bool,
    ) -> Self {
        Self {
            active_variant: Some(variant),
            document: Some(document),
            load_state: LoadState::Remixing,
            generation: Some(generation),
            is_paused,
        }
    }

    /// Session after a failed variant load.
    pub fn failed(variant: VariantId) -> Self {
        Self {
            active_variant: Some(variant),
            document: None,
            load_state: LoadState::Failed,
            generation: None,
            is_paused: false,
        }
    }

    /// Returns true if a document is live and displayable.
    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }

    /// Checks the document/state consistency invariant.
    pub fn is_consistent(&self) -> bool {
        let displayable = matches!(self.load_state, LoadState::Ready | LoadState::Remixing);
        self.document.is_some() == displayable
    }
}

impl Default for LiveSession {
    fn default() -> Self {
        Self::idle()
    }
}
