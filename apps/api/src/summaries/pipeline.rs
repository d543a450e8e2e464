//! Fallback Orchestrator — tries the preferred summarization backend, and on
//! any failure swaps to the alternate backend exactly once.
//!
//! Both failure kinds fall back identically; only the error reported after a
//! double failure differs by the originating branch. That asymmetry matches
//! shipped behavior and is pinned by tests — do not "fix" it without a
//! product decision.

use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::providers::{ProviderErrorKind, SummaryProvider};
use crate::summaries::title::title_from_file_name;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Both AI services are currently unavailable. Please try again later.")]
    AllProvidersUnavailable,

    #[error("Failed to generate summary with available AI providers")]
    Generation,

    #[error("Failed to generate summary - empty response from AI")]
    EmptyResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub title: String,
    pub summary_text: String,
}

/// Runs the one-shot provider swap and normalizes the winning output.
/// No retry loop beyond the swap, no backoff; timeouts are whatever the
/// shared HTTP client enforces.
pub async fn generate_summary(
    primary: &dyn SummaryProvider,
    secondary: &dyn SummaryProvider,
    text: &str,
    file_name: &str,
) -> Result<SummaryResult, SummarizeError> {
    let summary = match primary.summarize(text).await {
        Ok(summary) => summary,
        Err(primary_err) => {
            warn!(
                "{} failed ({primary_err}), falling back to {}",
                primary.name(),
                secondary.name()
            );

            let branch = primary_err.kind();
            match secondary.summarize(text).await {
                Ok(summary) => summary,
                Err(secondary_err) => {
                    error!(
                        "{} also failed ({secondary_err}); no providers left",
                        secondary.name()
                    );
                    return Err(match branch {
                        ProviderErrorKind::RateLimit => SummarizeError::AllProvidersUnavailable,
                        ProviderErrorKind::Other => SummarizeError::Generation,
                    });
                }
            }
        }
    };

    let summary = summary.trim();
    if summary.is_empty() {
        return Err(SummarizeError::EmptyResult);
    }

    Ok(SummaryResult {
        title: title_from_file_name(file_name),
        summary_text: summary.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted in-process backend: every call increments a counter and
    /// returns whatever the closure produces.
    struct MockProvider {
        name: &'static str,
        calls: AtomicUsize,
        respond: Box<dyn Fn() -> Result<String, ProviderError> + Send + Sync>,
    }

    impl MockProvider {
        fn succeeding(name: &'static str, output: &str) -> Self {
            let output = output.to_string();
            Self {
                name,
                calls: AtomicUsize::new(0),
                respond: Box::new(move || Ok(output.clone())),
            }
        }

        fn rate_limited(name: &'static str) -> Self {
            Self {
                name,
                calls: AtomicUsize::new(0),
                respond: Box::new(move || Err(ProviderError::RateLimited { provider: "mock" })),
            }
        }

        fn erroring(name: &'static str) -> Self {
            Self {
                name,
                calls: AtomicUsize::new(0),
                respond: Box::new(move || {
                    Err(ProviderError::Api {
                        provider: "mock",
                        status: 500,
                        message: "internal error".to_string(),
                    })
                }),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SummaryProvider for MockProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn summarize(&self, _text: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.respond)()
        }
    }

    #[tokio::test]
    async fn test_primary_success_never_calls_secondary() {
        let primary = MockProvider::succeeding("primary", "  # Summary\n\nDone.  ");
        let secondary = MockProvider::succeeding("secondary", "unused");

        let result = generate_summary(&primary, &secondary, "text", "doc.pdf")
            .await
            .unwrap();

        assert_eq!(result.summary_text, "# Summary\n\nDone.");
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_rate_limited_primary_uses_secondary_output() {
        let primary = MockProvider::rate_limited("primary");
        let secondary = MockProvider::succeeding("secondary", "Report: all clear\n");

        let result = generate_summary(&primary, &secondary, "text", "audit-log.pdf")
            .await
            .unwrap();

        assert_eq!(result.summary_text, "Report: all clear");
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_non_rate_limit_failure_also_falls_back() {
        // Pins the identical fallback on both branches.
        let primary = MockProvider::erroring("primary");
        let secondary = MockProvider::succeeding("secondary", "Recovered");

        let result = generate_summary(&primary, &secondary, "text", "doc.pdf")
            .await
            .unwrap();

        assert_eq!(result.summary_text, "Recovered");
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_double_failure_on_rate_limit_branch() {
        let primary = MockProvider::rate_limited("primary");
        let secondary = MockProvider::erroring("secondary");

        let err = generate_summary(&primary, &secondary, "text", "doc.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, SummarizeError::AllProvidersUnavailable));
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_double_failure_on_other_branch() {
        let primary = MockProvider::erroring("primary");
        let secondary = MockProvider::rate_limited("secondary");

        let err = generate_summary(&primary, &secondary, "text", "doc.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, SummarizeError::Generation));
    }

    #[tokio::test]
    async fn test_whitespace_only_winner_is_empty_result() {
        let primary = MockProvider::succeeding("primary", "   \n\t ");
        let secondary = MockProvider::succeeding("secondary", "unused");

        let err = generate_summary(&primary, &secondary, "text", "doc.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, SummarizeError::EmptyResult));
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_title_is_formatted_from_file_name() {
        let primary = MockProvider::succeeding("primary", "Summary body");
        let secondary = MockProvider::succeeding("secondary", "unused");

        let result = generate_summary(&primary, &secondary, "text", "q3-board_deck.pdf")
            .await
            .unwrap();

        assert_eq!(result.title, "Q3 Board Deck");
    }
}
