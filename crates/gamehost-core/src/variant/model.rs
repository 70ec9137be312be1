//! Variant identifiers, descriptors and the built-in registry.

use super::prompts;
use crate::error::{HostError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the known pre-built game documents.
///
/// This is a closed set, defined at build time; users cannot create new
/// variants at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantId {
    Gemini2p5,
    Gemini3,
}

impl VariantId {
    /// Returns the stable string form of the identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini2p5 => "gemini2p5",
            Self::Gemini3 => "gemini3",
        }
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantId {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gemini2p5" => Ok(Self::Gemini2p5),
            "gemini3" => Ok(Self::Gemini3),
            other => Err(HostError::internal(format!(
                "unknown variant id: '{other}'"
            ))),
        }
    }
}

/// Static description of a pre-built variant.
///
/// Read-only at runtime. `source_location` is relative to the host's static
/// asset root and is resolved by the document fetcher. `model_id` names the
/// generative model used when remixing this variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub id: VariantId,
    pub source_location: &'static str,
    pub descriptive_prompt: &'static str,
    pub model_id: &'static str,
}

/// The closed set of variant descriptors known to this host build.
#[derive(Debug, Clone)]
pub struct VariantRegistry {
    descriptors: Vec<VariantDescriptor>,
}

impl VariantRegistry {
    /// Returns the registry of built-in variants.
    pub fn builtin() -> Self {
        Self {
            descriptors: vec![
                VariantDescriptor {
                    id: VariantId::Gemini2p5,
                    source_location: "./init/gemini2p5.html",
                    descriptive_prompt: prompts::GEMINI2P5_PROMPT,
                    model_id: "gemini-2.5-pro",
                },
                VariantDescriptor {
                    id: VariantId::Gemini3,
                    source_location: "./init/gemini3.html",
                    descriptive_prompt: prompts::GEMINI3_PROMPT,
                    model_id: "gemini-3-pro-preview",
                },
            ],
        }
    }

    /// Looks up the descriptor for a variant id.
    ///
    /// `VariantId` is a closed enum and every id has a built-in descriptor,
    /// so this never fails for registries created via [`builtin`](Self::builtin).
    pub fn descriptor(&self, id: VariantId) -> &VariantDescriptor {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .unwrap_or_else(|| unreachable!("descriptor missing for built-in variant '{id}'"))
    }

    /// Returns all known descriptors.
    pub fn all(&self) -> &[VariantDescriptor] {
        &self.descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_id_round_trip() {
        for id in [VariantId::Gemini2p5, VariantId::Gemini3] {
            assert_eq!(id.as_str().parse::<VariantId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_variant_id_rejected() {
        assert!("gemini99".parse::<VariantId>().is_err());
    }

    #[test]
    fn test_builtin_registry_covers_all_ids() {
        let registry = VariantRegistry::builtin();
        assert_eq!(registry.all().len(), 2);

        let descriptor = registry.descriptor(VariantId::Gemini3);
        assert_eq!(descriptor.source_location, "./init/gemini3.html");
        assert_eq!(descriptor.model_id, "gemini-3-pro-preview");
        assert!(!descriptor.descriptive_prompt.trim().is_empty());
    }
}
