//! Remix request construction and response sanitization.

use crate::document;
use crate::error::{HostError, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// Pause-protocol listener the generative service must preserve verbatim,
/// so the produced document keeps responding to pause signals.
pub const PAUSE_LISTENER_SNIPPET: &str = r#"<script>
window.addEventListener('message', (e) => {
  if (e.data && e.data.type === 'PAUSE_GAME') {
    if (typeof state !== 'undefined' && state.hasOwnProperty('isPaused')) {
       state.isPaused = e.data.payload;
       if(!state.isPaused && typeof clock !== 'undefined') clock.getDelta();
    } else if (typeof isPaused !== 'undefined') {
       isPaused = e.data.payload;
       if(!isPaused && typeof clock !== 'undefined') clock.getDelta();
    }
  }
});
</script>"#;

static SYSTEM_DIRECTIVE: Lazy<String> = Lazy::new(|| {
    format!(
        "You are an expert Creative Technologist and 3D Web Game Developer.\n\
         Your task is to modify the provided web game code based on the user's remix request.\n\
         Output ONLY the raw HTML code. Do not include markdown formatting.\n\
         IMPORTANT: Preserve the following script snippet exactly as it is in the output \
         to ensure the game can be paused by the parent window:\n{PAUSE_LISTENER_SNIPPET}\n"
    )
});

/// One remix invocation's inputs. Ephemeral, not retained after the call.
#[derive(Debug, Clone)]
pub struct RemixRequest {
    /// Free-text user instruction
    pub instruction: String,
    /// Descriptive prompt the base document was generated from
    pub base_prompt: String,
    /// Full source of the current live document
    pub base_document: String,
    /// Generative model to use for this variant
    pub model: String,
}

/// A single text-completion call to the generative content service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_directive: String,
    /// Ordered text parts: prompt context, current source, remix instruction
    pub parts: Vec<String>,
}

/// Port onto the generative content service, consumed as a black-box
/// text-completion API.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Executes the call and returns the single candidate text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Turns a natural-language instruction plus the current document source into
/// a new, safely-embeddable document.
pub struct RemixPipeline {
    client: std::sync::Arc<dyn GenerativeClient>,
}

impl RemixPipeline {
    pub fn new(client: std::sync::Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Produces the remixed document.
    ///
    /// The service response is stripped of any code-fence markers it may have
    /// added despite instructions, checked for a recognizable document root,
    /// and passed through document preparation only when it does not already
    /// carry a base-location declaration (avoiding double-insertion when the
    /// model echoes the declaration back).
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Remix`] when the service call fails, returns an
    /// empty body, or the sanitized result is not a recognizable document.
    /// There is no automatic retry; the user re-issues the instruction.
    pub async fn remix(&self, request: &RemixRequest) -> Result<String> {
        let call = GenerationRequest {
            model: request.model.clone(),
            system_directive: SYSTEM_DIRECTIVE.clone(),
            parts: vec![
                format!("ORIGINAL PROMPT CONTEXT:\n{}", request.base_prompt),
                format!("CURRENT SOURCE CODE:\n{}", request.base_document),
                format!(
                    "REMIX INSTRUCTION: Apply this modification to the game: \"{}\". \
                     Ensure the code remains a single HTML file.",
                    request.instruction
                ),
            ],
        };

        let raw = self
            .client
            .generate(&call)
            .await
            .map_err(|e| HostError::remix(format!("generative service call failed: {e}")))?;

        let stripped = strip_code_fences(&raw);
        if stripped.trim().is_empty() {
            return Err(HostError::remix("service returned an empty document"));
        }
        if !has_document_root(stripped) {
            return Err(HostError::remix(
                "service output has no recognizable document root",
            ));
        }

        if document::has_base_declaration(stripped) {
            Ok(stripped.to_string())
        } else {
            Ok(document::normalize(stripped))
        }
    }
}

/// Strips leading/trailing markdown code-fence markers.
fn strip_code_fences(text: &str) -> &str {
    let mut out = text.trim();
    if let Some(rest) = out.strip_prefix("```html") {
        out = rest.trim_start();
    } else if let Some(rest) = out.strip_prefix("```") {
        out = rest.trim_start();
    }
    if let Some(rest) = out.strip_suffix("```") {
        out = rest.trim_end();
    }
    out
}

fn has_document_root(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.contains("<html") || lower.contains("<!doctype")
}
