//! Write-once caching store for variant source documents.

use super::model::{VariantId, VariantRegistry};
use crate::error::{HostError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};

/// Port for retrieving a raw document from a source location.
///
/// Production code uses an HTTP implementation; tests inject fakes.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetches the full document text at `location`.
    async fn fetch(&self, location: &str) -> Result<String>;
}

/// Fetches and caches the raw source document for each known variant.
///
/// The cache is an append-only map keyed by [`VariantId`]; each entry is
/// write-once and lives for the lifetime of the host process. Failures never
/// populate the cache, so a later `resolve` for the same id retries the
/// retrieval. No retry policy is imposed here.
pub struct VariantStore {
    registry: Arc<VariantRegistry>,
    fetcher: Arc<dyn DocumentFetcher>,
    cache: RwLock<HashMap<VariantId, Arc<OnceCell<String>>>>,
}

impl VariantStore {
    /// Creates a store backed by the given registry and fetcher.
    pub fn new(registry: Arc<VariantRegistry>, fetcher: Arc<dyn DocumentFetcher>) -> Self {
        Self {
            registry,
            fetcher,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolves a variant id to its raw source document.
    ///
    /// The first call for a given id performs a network retrieval; subsequent
    /// calls return the cached value without any network access. Concurrent
    /// resolutions of the same id before the first completes coalesce onto a
    /// single retrieval through the per-id cache slot.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Load`] when the retrieval fails or the body is
    /// empty; the cache is left unpopulated in that case.
    pub async fn resolve(&self, id: VariantId) -> Result<String> {
        let slot = self.slot(id).await;
        let document = slot
            .get_or_try_init(|| async {
                let descriptor = self.registry.descriptor(id);
                tracing::debug!(
                    "Fetching variant '{}' from {}",
                    id,
                    descriptor.source_location
                );
                let body = self
                    .fetcher
                    .fetch(descriptor.source_location)
                    .await
                    .map_err(|e| HostError::load(id, e.to_string()))?;
                if body.trim().is_empty() {
                    return Err(HostError::load(id, "empty response body"));
                }
                Ok(body)
            })
            .await?;
        Ok(document.clone())
    }

    /// Returns true if the variant's document has been cached.
    pub async fn is_cached(&self, id: VariantId) -> bool {
        let cache = self.cache.read().await;
        cache.get(&id).is_some_and(|slot| slot.initialized())
    }

    async fn slot(&self, id: VariantId) -> Arc<OnceCell<String>> {
        {
            let cache = self.cache.read().await;
            if let Some(slot) = cache.get(&id) {
                return slot.clone();
            }
        }
        let mut cache = self.cache.write().await;
        cache.entry(id).or_default().clone()
    }
}
