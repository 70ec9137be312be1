//! Remix pipeline module.
//!
//! A remix is a user-issued natural-language instruction used to derive a
//! modified document from the current live document via the generative
//! content service. This module builds the service request, sanitizes the
//! response, and re-applies document preparation.
//!
//! # Module Structure
//!
//! - `pipeline`: The remix pipeline and the generative service port

mod pipeline;

pub use pipeline::{
    GenerationRequest, GenerativeClient, PAUSE_LISTENER_SNIPPET, RemixPipeline, RemixRequest,
};
