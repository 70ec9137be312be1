//! Document preparation module.
//!
//! The live documents are self-contained HTML files whose relative resource
//! references must resolve against the host's static asset root. This module
//! contains the pure text transformation that pins that base location.

mod prepare;

pub use prepare::{BASE_DECLARATION, has_base_declaration, normalize};
