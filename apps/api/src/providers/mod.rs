//! Summary Provider Interface — a uniform abstraction over the two
//! interchangeable summarization backends.
//!
//! ARCHITECTURAL RULE: no other module may call a summarization API directly.
//! `AppState` carries the backends as `Arc<dyn SummaryProvider>`, so the
//! orchestrator and handlers never know which vendor they are talking to.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;
pub mod openai;
pub mod prompts;

/// Request shaping shared by both backends.
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_OUTPUT_TOKENS: u32 = 1500;

/// Coarse failure classification used by the fallback orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    RateLimit,
    Other,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error (status {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider} rate limit exhausted")]
    RateLimited { provider: &'static str },

    #[error("{provider} returned empty content")]
    EmptyResponse { provider: &'static str },
}

impl ProviderError {
    /// The single classification point. Callers branch on the returned kind;
    /// nothing downstream inspects message text.
    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            ProviderError::RateLimited { .. } => ProviderErrorKind::RateLimit,
            _ => ProviderErrorKind::Other,
        }
    }
}

/// A summarization backend. Both implementations accept the extracted
/// document text and return the raw summary string; request shaping
/// (prompt template, token ceiling, temperature) is per-backend.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn summarize(&self, text: &str) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_classifies_as_rate_limit() {
        let err = ProviderError::RateLimited { provider: "gemini" };
        assert_eq!(err.kind(), ProviderErrorKind::RateLimit);
    }

    #[test]
    fn test_api_error_classifies_as_other() {
        let err = ProviderError::Api {
            provider: "gemini",
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(err.kind(), ProviderErrorKind::Other);
    }

    #[test]
    fn test_empty_response_classifies_as_other() {
        let err = ProviderError::EmptyResponse { provider: "openai" };
        assert_eq!(err.kind(), ProviderErrorKind::Other);
    }

    #[test]
    fn test_classification_ignores_message_text() {
        // A message that merely mentions rate limiting is still an API error.
        let err = ProviderError::Api {
            provider: "openai",
            status: 400,
            message: "your prompt mentioned RATE_LIMIT".to_string(),
        };
        assert_eq!(err.kind(), ProviderErrorKind::Other);
    }
}
