//! Variant domain module.
//!
//! A variant is one of the fixed pre-built base documents the host can
//! display. This module contains the variant identifiers and descriptors,
//! the built-in registry, and the caching store that resolves a variant id
//! to its raw source document.
//!
//! # Module Structure
//!
//! - `model`: Variant identifiers, descriptors and the built-in registry
//! - `prompts`: The descriptive prompts the base documents were generated from
//! - `store`: Write-once caching store (`VariantStore`) and its fetch port

mod model;
mod prompts;
mod store;

// Re-export public API
pub use model::{VariantDescriptor, VariantId, VariantRegistry};
pub use store::{DocumentFetcher, VariantStore};
