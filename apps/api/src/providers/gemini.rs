//! Primary summarization backend: Google Gemini.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::providers::prompts::{summary_user_message, SUMMARY_SYSTEM_PROMPT};
use crate::providers::{
    ProviderError, SummaryProvider, MAX_OUTPUT_TOKENS, TEMPERATURE,
};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const MODEL: &str = "gemini-1.5-flash";
const PROVIDER: &str = "gemini";

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
    status: Option<String>,
}

/// Gemini signals quota exhaustion either as HTTP 429 or as a
/// RESOURCE_EXHAUSTED status in the error payload.
fn is_rate_limited(http_status: u16, api_status: Option<&str>) -> bool {
    http_status == 429 || api_status == Some("RESOURCE_EXHAUSTED")
}

pub struct GeminiProvider {
    client: Client,
    api_key: String,
}

impl GeminiProvider {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl SummaryProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part {
                        text: SUMMARY_SYSTEM_PROMPT.to_string(),
                    },
                    Part {
                        text: summary_user_message(text),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!("{API_BASE}/{MODEL}:generateContent?key={}", self.api_key);
        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let parsed = serde_json::from_str::<GeminiError>(&body).ok();
            let api_status = parsed.as_ref().and_then(|e| e.error.status.as_deref());

            if is_rate_limited(status.as_u16(), api_status) {
                return Err(ProviderError::RateLimited { provider: PROVIDER });
            }
            return Err(ProviderError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                message: parsed.map(|e| e.error.message).unwrap_or(body),
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        let summary = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .unwrap_or_default();

        if summary.trim().is_empty() {
            return Err(ProviderError::EmptyResponse { provider: PROVIDER });
        }

        debug!("Gemini summary generated ({} chars)", summary.len());
        Ok(summary)
    }
}
