//! Gemini `generateContent` implementation of `NarrativeGenerator`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use compass_core::error::DomainError;
use compass_core::generator::NarrativeGenerator;

use crate::config::GeminiConfig;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Narrative generator backed by the hosted Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiNarrativeGenerator {
    client: Client,
    config: GeminiConfig,
}

impl GeminiNarrativeGenerator {
    /// Creates a generator with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Generation` if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Generation(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// The model requests are sent to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }
}

/// Concatenates the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    (!text.trim().is_empty()).then_some(text)
}

#[async_trait]
impl NarrativeGenerator for GeminiNarrativeGenerator {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate_narrative(&self, prompt: &str) -> Result<String, DomainError> {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Generation(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorEnvelope>()
                .await
                .map(|envelope| envelope.error.message)
                .unwrap_or_default();
            return Err(DomainError::Generation(if detail.is_empty() {
                format!("model API returned HTTP {status}")
            } else {
                format!("model API returned HTTP {status}: {detail}")
            }));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Generation(format!("malformed model response: {e}")))?;

        let text = extract_text(parsed)
            .ok_or_else(|| DomainError::Generation("model returned no text".to_owned()))?;
        debug!(model = %self.config.model, narrative_len = text.len(), "received narrative");
        Ok(text)
    }
}
