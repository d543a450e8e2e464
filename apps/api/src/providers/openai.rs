//! Secondary summarization backend: OpenAI chat completions.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::providers::prompts::{summary_user_message, SUMMARY_SYSTEM_PROMPT};
use crate::providers::{
    ProviderError, SummaryProvider, MAX_OUTPUT_TOKENS, TEMPERATURE,
};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-4o-mini";
const PROVIDER: &str = "openai";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
}

impl OpenAiProvider {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl SummaryProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SUMMARY_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: summary_user_message(text),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimited { provider: PROVIDER });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let summary = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if summary.trim().is_empty() {
            return Err(ProviderError::EmptyResponse { provider: PROVIDER });
        }

        debug!("OpenAI summary generated ({} chars)", summary.len());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_content_extraction() {
        let json = r###"{
            "choices": [
                {"message": {"role": "assistant", "content": "## Report\n\n📊 Findings"}}
            ]
        }"###;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap();
        assert_eq!(text, "## Report\n\n📊 Findings");
    }

    #[test]
    fn test_error_payload_parses_message() {
        let json = r#"{
            "error": {
                "message": "You exceeded your current quota",
                "type": "insufficient_quota"
            }
        }"#;
        let parsed: OpenAiError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "You exceeded your current quota");
    }

    #[test]
    fn test_empty_choices_yields_no_content() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .is_none());
    }
}
