//! Adapters for the game host's external interfaces.
//!
//! - [`gemini_client`]: Direct REST client for the Gemini generative API,
//!   implementing the core's `GenerativeClient` port.
//! - [`http_fetcher`]: reqwest-based retrieval of variant source documents,
//!   implementing the core's `DocumentFetcher` port.

pub mod gemini_client;
pub mod http_fetcher;

pub use gemini_client::GeminiClient;
pub use http_fetcher::HttpDocumentFetcher;
