//! GeminiClient - Direct REST API implementation of the generative port.
//!
//! Calls the Gemini REST API directly without CLI dependency. The API key is
//! provided explicitly or read from the `GEMINI_API_KEY` environment variable.

use async_trait::async_trait;
use gamehost_core::error::{HostError, Result};
use gamehost_core::remix::{GenerationRequest, GenerativeClient};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client that talks to the Gemini HTTP API.
///
/// The model is not fixed at construction: each [`GenerationRequest`] names
/// the model to use, because every variant remixes through the model that
/// originally generated it.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    pub fn try_from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            HostError::transport("GEMINI_API_KEY environment variable is not set")
        })?;
        Ok(Self::new(api_key))
    }

    /// Overrides the API base URL after construction.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_url(&self, model: &str) -> String {
        format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            api_key = self.api_key
        )
    }

    async fn send_request(&self, model: &str, body: &GenerateContentRequest) -> Result<String> {
        let url = self.request_url(model);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| HostError::transport(format!("Gemini API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            HostError::transport(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let contents = vec![Content {
            role: "user".to_string(),
            parts: request
                .parts
                .iter()
                .map(|text| Part { text: text.clone() })
                .collect(),
        }];

        let system_instruction = Some(Content {
            role: "system".to_string(),
            parts: vec![Part {
                text: request.system_directive.clone(),
            }],
        });

        let body = GenerateContentRequest {
            contents,
            system_instruction,
        };

        tracing::debug!("Calling Gemini model '{}'", request.model);
        self.send_request(&request.model, &body).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            HostError::transport("Gemini API returned no text in the response candidates")
        })
}

fn map_http_error(status: StatusCode, body: String) -> HostError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    HostError::transport(format!("HTTP {}: {message}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response(text: Option<&str>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(ContentResponse {
                    parts: vec![PartResponse {
                        text: text.map(str::to_string),
                    }],
                }),
            }]),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part {
                        text: "context".to_string(),
                    },
                    Part {
                        text: "source".to_string(),
                    },
                ],
            }],
            system_instruction: Some(Content {
                role: "system".to_string(),
                parts: vec![Part {
                    text: "directive".to_string(),
                }],
            }),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{"text": "context"}, {"text": "source"}],
                }],
                "system_instruction": {
                    "role": "system",
                    "parts": [{"text": "directive"}],
                },
            })
        );
    }

    #[test]
    fn test_system_instruction_omitted_when_absent() {
        let body = GenerateContentRequest {
            contents: vec![],
            system_instruction: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("system_instruction").is_none());
    }

    #[test]
    fn test_extract_text_response() {
        let text = extract_text_response(sample_response(Some("<html/>"))).unwrap();
        assert_eq!(text, "<html/>");
    }

    #[test]
    fn test_extract_text_response_takes_first_candidate() {
        let candidate = |text: &str| Candidate {
            content: Some(ContentResponse {
                parts: vec![PartResponse {
                    text: Some(text.to_string()),
                }],
            }),
        };
        let response = GenerateContentResponse {
            candidates: Some(vec![candidate("first"), candidate("second")]),
        };
        assert_eq!(extract_text_response(response).unwrap(), "first");
    }

    #[test]
    fn test_extract_text_response_without_text_fails() {
        assert!(extract_text_response(sample_response(None)).is_err());
        assert!(extract_text_response(GenerateContentResponse { candidates: None }).is_err());
    }

    #[test]
    fn test_map_http_error_uses_gemini_error_body() {
        let body = json!({
            "error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })
        .to_string();
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body);
        assert!(err.to_string().contains("RESOURCE_EXHAUSTED: quota exceeded"));
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(err.to_string().contains("upstream down"));
    }

    #[test]
    fn test_request_url() {
        let client = GeminiClient::new("secret").with_base_url("http://localhost:9999/models");
        assert_eq!(
            client.request_url("gemini-3-pro-preview"),
            "http://localhost:9999/models/gemini-3-pro-preview:generateContent?key=secret"
        );
    }
}
