//! HTTP retrieval of variant source documents.

use async_trait::async_trait;
use gamehost_core::error::{HostError, Result};
use gamehost_core::variant::DocumentFetcher;
use reqwest::Client;

/// Fetches variant documents over HTTP GET.
///
/// Variant source locations are relative URIs (for example
/// `./init/gemini3.html`); they are resolved against the asset root this
/// fetcher was constructed with. A 2xx response is required and the body is
/// returned as the full document text.
#[derive(Clone)]
pub struct HttpDocumentFetcher {
    client: Client,
    asset_root: String,
}

impl HttpDocumentFetcher {
    /// Creates a fetcher resolving relative locations against `asset_root`.
    pub fn new(asset_root: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            asset_root: asset_root.into(),
        }
    }

    fn resolve_location(&self, location: &str) -> String {
        let relative = location.strip_prefix("./").unwrap_or(location);
        let relative = relative.strip_prefix('/').unwrap_or(relative);
        format!("{}/{relative}", self.asset_root.trim_end_matches('/'))
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, location: &str) -> Result<String> {
        let url = self.resolve_location(location);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| HostError::transport(format!("GET {url} failed: {err}")))?;

        if !response.status().is_success() {
            return Err(HostError::transport(format!(
                "GET {url} returned HTTP {}",
                response.status().as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|err| HostError::transport(format!("Failed to read body of {url}: {err}")))
    }
}
