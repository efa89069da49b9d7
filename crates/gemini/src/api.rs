//! REST client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use roomlens_core::analysis::{analysis_prompt, RoomAnalysis};
use roomlens_core::generator::{GeneratorError, ScenarioGenerator};
use roomlens_core::room::RoomType;

use crate::schema;

/// Default public API host. Overridable so tests can point at a stub.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini connection settings loaded from the environment.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent via the `x-goog-api-key` header.
    pub api_key: String,
    /// Model name, e.g. `gemini-2.0-flash`.
    pub model: String,
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl GeminiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default                                      |
    /// |-------------------|----------------------------------------------|
    /// | `GEMINI_API_KEY`  | -- (required)                                |
    /// | `GEMINI_MODEL`    | `gemini-2.0-flash`                           |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`  |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Self {
            api_key,
            model,
            base_url,
        }
    }
}

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response arrived but carried no usable analysis document.
    #[error("Unusable Gemini response: {0}")]
    Decode(String),
}

/// HTTP client for one Gemini model.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, config: GeminiConfig) -> Self {
        Self { http, config }
    }

    /// One structured-generation call: room photo in, [`RoomAnalysis`] out.
    ///
    /// The response schema pins the document shape (closed enums, exactly
    /// three scenarios); the model is expected to conform internally. No
    /// retries happen here.
    pub async fn generate_analysis(
        &self,
        image_base64: &str,
        room_type: RoomType,
    ) -> Result<RoomAnalysis, GeminiError> {
        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {
                        "inline_data": {
                            "mime_type": "image/jpeg",
                            "data": image_base64,
                        }
                    },
                    { "text": analysis_prompt(room_type) },
                ],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::room_analysis_schema(),
                "temperature": 0.4,
            },
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = response.json().await?;
        let text = extract_candidate_text(envelope)
            .ok_or_else(|| GeminiError::Decode("no candidate text in response".into()))?;

        tracing::debug!(model = %self.config.model, bytes = text.len(), "Received structured output");

        serde_json::from_str::<RoomAnalysis>(&text)
            .map_err(|e| GeminiError::Decode(format!("candidate is not a valid analysis: {e}")))
    }
}

#[async_trait]
impl ScenarioGenerator for GeminiClient {
    async fn generate(
        &self,
        image_base64: &str,
        room_type: RoomType,
    ) -> Result<RoomAnalysis, GeneratorError> {
        self.generate_analysis(image_base64, room_type)
            .await
            .map_err(|e| match e {
                GeminiError::Decode(msg) => GeneratorError::Decode(msg),
                other => GeneratorError::Request(other.to_string()),
            })
    }
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Pull the first text part out of the first candidate.
fn extract_candidate_text(envelope: GenerateContentResponse) -> Option<String> {
    envelope
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .find_map(|p| p.text)
}
