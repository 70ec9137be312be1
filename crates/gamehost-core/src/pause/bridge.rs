//! Fire-and-forget pause signalling over a cross-document channel.

use crate::session::GenerationToken;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Message type tag understood by the embedded program's pause listener.
pub const PAUSE_MESSAGE_TYPE: &str = "PAUSE_GAME";

/// A pause/resume command addressed to a specific live document instance.
///
/// The embedded program must discard signals whose generation token does not
/// match its own; the host never treats a mismatched signal as authoritative
/// either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseSignal {
    pub generation: GenerationToken,
    pub paused: bool,
}

impl PauseSignal {
    /// Renders the wire shape posted into the embedded frame.
    pub fn to_wire(&self) -> serde_json::Value {
        json!({
            "type": PAUSE_MESSAGE_TYPE,
            "generation": self.generation,
            "payload": self.paused,
        })
    }
}

/// Send-only capability into the embedded frame.
///
/// Delivery is fire-and-forget with no acknowledgment: if the target frame
/// has already been torn down, the send is a silent no-op. Implementations
/// must not block.
pub trait FrameChannel: Send + Sync {
    fn send(&self, signal: PauseSignal);
}

/// Maintains the pause channel to the currently live document's frame.
///
/// Holds no persistent state beyond the attached channel and the last signal
/// actually sent; the pause state itself is derived from the live session on
/// every sync.
#[derive(Default)]
pub struct PauseBridge {
    frame: RwLock<Option<Arc<dyn FrameChannel>>>,
    last_sent: RwLock<Option<PauseSignal>>,
}

impl PauseBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the channel of a freshly mounted frame, replacing any
    /// previous one.
    pub async fn attach(&self, frame: Arc<dyn FrameChannel>) {
        let mut current = self.frame.write().await;
        *current = Some(frame);
    }

    /// Drops the channel when the frame is torn down.
    pub async fn detach(&self) {
        let mut current = self.frame.write().await;
        *current = None;
    }

    /// Sends a single pause signal addressed to the given document generation.
    ///
    /// At-most-once, no retry, no handshake. With no frame attached this is a
    /// silent no-op.
    pub async fn sync(&self, generation: GenerationToken, paused: bool) {
        let signal = PauseSignal { generation, paused };
        let frame = self.frame.read().await.clone();
        match frame {
            Some(frame) => {
                frame.send(signal);
                let mut last = self.last_sent.write().await;
                *last = Some(signal);
                tracing::debug!(
                    "Pause sync sent: generation {}, paused {}",
                    generation,
                    paused
                );
            }
            None => {
                tracing::debug!(
                    "Pause sync dropped, no frame attached (generation {})",
                    generation
                );
            }
        }
    }

    /// Returns the last signal actually sent, if any.
    pub async fn last_sent(&self) -> Option<PauseSignal> {
        *self.last_sent.read().await
    }
}
