//! Session lifecycle management.

use super::model::{GenerationToken, LiveSession, LoadState};
use crate::document;
use crate::error::{HostError, Result};
use crate::pause::{FrameChannel, PauseBridge, PauseSignal};
use crate::remix::{RemixPipeline, RemixRequest};
use crate::variant::{VariantId, VariantRegistry, VariantStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

/// What happened to the result of an async operation once it resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The result was published as the live document
    Applied,
    /// A newer operation was issued while this one was in flight; the result
    /// was discarded without touching the session
    Superseded,
}

/// The state machine owning the single live session.
///
/// `SessionController` is responsible for:
/// - Selecting variants and publishing their prepared documents
/// - Sequencing remix requests against the live document
/// - Discarding results of superseded loads and remixes (last-issued-wins)
/// - Driving pause synchronization on overlay and frame-load events
///
/// It is the only writer of the [`LiveSession`], which is replaced wholesale
/// on every transition. The controller lives for the process lifetime; there
/// is no terminal state.
pub struct SessionController {
    registry: Arc<VariantRegistry>,
    store: Arc<VariantStore>,
    pipeline: RemixPipeline,
    bridge: PauseBridge,
    session: RwLock<LiveSession>,
    /// Ticket counter tagging every in-flight load/remix; a result is applied
    /// only if its ticket is still the most recently issued one.
    issue_counter: AtomicU64,
    /// Source of fresh generation tokens, minted per published document.
    generation_counter: AtomicU64,
    /// Visibility of the host-level blocking overlay (onboarding dialog).
    overlay_visible: AtomicBool,
}

impl SessionController {
    /// Creates a controller with no variant selected yet.
    ///
    /// The blocking overlay starts visible, matching the host chrome which
    /// opens on its onboarding dialog.
    pub fn new(
        registry: Arc<VariantRegistry>,
        store: Arc<VariantStore>,
        pipeline: RemixPipeline,
    ) -> Self {
        Self {
            registry,
            store,
            pipeline,
            bridge: PauseBridge::new(),
            session: RwLock::new(LiveSession::idle()),
            issue_counter: AtomicU64::new(0),
            generation_counter: AtomicU64::new(0),
            overlay_visible: AtomicBool::new(true),
        }
    }

    /// Returns a snapshot of the live session.
    pub async fn session(&self) -> LiveSession {
        self.session.read().await.clone()
    }

    /// Returns the current blocking-overlay visibility.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible.load(Ordering::SeqCst)
    }

    /// Switches the live session to the given variant.
    ///
    /// Always legal from any state; supersedes any in-flight load or remix.
    /// Resolves the variant through the store, prepares the document, and
    /// publishes it with a fresh generation token.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Load`] and leaves the session `Failed` when the
    /// retrieval fails. A result that arrives after a newer operation was
    /// issued is discarded and reported as [`ApplyOutcome::Superseded`].
    pub async fn select_variant(&self, id: VariantId) -> Result<ApplyOutcome> {
        let ticket = {
            let mut session = self.session.write().await;
            // Re-selecting the variant that is already live is a no-op.
            if session.is_ready() && session.active_variant == Some(id) {
                return Ok(ApplyOutcome::Applied);
            }
            let ticket = self.issue();
            *session = LiveSession::loading(id);
            ticket
        };

        tracing::info!("Selecting variant '{}'", id);
        let loaded = self
            .store
            .resolve(id)
            .await
            .map(|raw| document::normalize(&raw));

        let mut session = self.session.write().await;
        if !self.is_current(ticket) {
            tracing::debug!("Discarding stale load result for variant '{}'", id);
            return Ok(ApplyOutcome::Superseded);
        }

        match loaded {
            Ok(content) => {
                let generation = self.mint_generation();
                let paused = self.overlay_visible();
                *session = LiveSession::ready(id, content, generation, paused);
                tracing::info!("Variant '{}' live as generation {}", id, generation);
                Ok(ApplyOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!("Variant '{}' failed to load: {}", id, err);
                *session = LiveSession::failed(id);
                Err(err)
            }
        }
    }

    /// Derives a new live document from the current one via the remix
    /// pipeline.
    ///
    /// Legal while a document is displayed (`Ready`, or `Remixing` when the
    /// user re-issues an instruction before the previous one resolved;
    /// overlapping remixes resolve last-issued-wins). On success the result
    /// is published with a fresh generation token; on failure the previously
    /// displayed document is retained unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidState`] when no document is displayed, and
    /// [`HostError::Remix`] when the pipeline fails. Superseded results are
    /// discarded and reported as [`ApplyOutcome::Superseded`].
    pub async fn request_remix(&self, instruction: &str) -> Result<ApplyOutcome> {
        let (ticket, variant, prior) = {
            let mut session = self.session.write().await;
            if !matches!(session.load_state, LoadState::Ready | LoadState::Remixing) {
                return Err(HostError::invalid_state(format!(
                    "remix requires a displayed document (state: {:?})",
                    session.load_state
                )));
            }
            let (Some(variant), Some(document), Some(generation)) = (
                session.active_variant,
                session.document.clone(),
                session.generation,
            ) else {
                return Err(HostError::internal(
                    "displayable session is missing its document or generation",
                ));
            };
            let ticket = self.issue();
            let paused = session.is_paused;
            *session = LiveSession::remixing(variant, document.clone(), generation, paused);
            (ticket, variant, (document, generation))
        };
        let (base_document, prior_generation) = prior;

        let descriptor = self.registry.descriptor(variant);
        let request = RemixRequest {
            instruction: instruction.to_string(),
            base_prompt: descriptor.descriptive_prompt.to_string(),
            base_document: base_document.clone(),
            model: descriptor.model_id.to_string(),
        };

        tracing::info!(
            "Remixing variant '{}' with instruction '{}'",
            variant,
            instruction
        );
        let remixed = self.pipeline.remix(&request).await;

        let mut session = self.session.write().await;
        if !self.is_current(ticket) {
            tracing::debug!(
                "Discarding stale remix result for instruction '{}'",
                instruction
            );
            return Ok(ApplyOutcome::Superseded);
        }

        match remixed {
            Ok(content) => {
                let generation = self.mint_generation();
                let paused = self.overlay_visible();
                *session = LiveSession::ready(variant, content, generation, paused);
                tracing::info!(
                    "Remix '{}' live as generation {}",
                    instruction,
                    generation
                );
                Ok(ApplyOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!("Remix '{}' failed: {}", instruction, err);
                // The previously displayed document must survive untouched;
                // the pause flag is re-derived so an overlay toggle that
                // happened mid-flight is not rolled back.
                let paused = self.overlay_visible();
                *session = LiveSession::ready(variant, base_document, prior_generation, paused);
                Err(err)
            }
        }
    }

    /// Updates the blocking-overlay visibility and re-synchronizes pause
    /// state against the live document, if there is one.
    pub async fn set_overlay_visible(&self, visible: bool) {
        self.overlay_visible.store(visible, Ordering::SeqCst);
        let generation = { self.session.read().await.generation };
        if let Some(generation) = generation {
            self.bridge.sync(generation, visible).await;
            let mut session = self.session.write().await;
            session.is_paused = visible;
        }
    }

    /// Registers the send-only channel of the freshly mounted frame.
    ///
    /// The embedding layer must call this every time the live document is
    /// replaced, before forwarding the frame's load notification.
    pub async fn attach_frame(&self, channel: Arc<dyn FrameChannel>) {
        self.bridge.attach(channel).await;
    }

    /// Drops the channel of a torn-down frame.
    pub async fn detach_frame(&self) {
        self.bridge.detach().await;
    }

    /// Handles the embedded document finishing its own internal load.
    ///
    /// If the blocking overlay is currently visible, a pause signal is sent
    /// immediately so the embedded program cannot start running before it has
    /// been told to pause.
    pub async fn notify_frame_loaded(&self) {
        if !self.overlay_visible() {
            return;
        }
        let generation = { self.session.read().await.generation };
        if let Some(generation) = generation {
            self.bridge.sync(generation, true).await;
            let mut session = self.session.write().await;
            session.is_paused = true;
        }
    }

    /// Returns the last pause signal actually delivered to a frame.
    pub async fn last_pause_signal(&self) -> Option<PauseSignal> {
        self.bridge.last_sent().await
    }

    fn issue(&self) -> u64 {
        self.issue_counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.issue_counter.load(Ordering::SeqCst) == ticket
    }

    fn mint_generation(&self) -> GenerationToken {
        GenerationToken::new(self.generation_counter.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
