//! Text Extractor — fetches an uploaded PDF by URL and decodes it to plain text.
//!
//! No retry here; the caller decides whether to surface or restart the run.
//! Extraction is idempotent for an unchanged source URL.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Uploaded file is not accessible. Please try uploading again.")]
    Fetch(#[from] reqwest::Error),

    #[error("Uploaded file is not accessible (status {0}). Please try uploading again.")]
    Status(u16),

    #[error("Failed to extract text from PDF: {0}")]
    Decode(String),

    #[error("Failed to extract text from PDF or PDF is empty")]
    EmptyContent,
}

/// Fetches the file at `file_url` and extracts its text content.
/// Fails on unreachable URLs, non-success statuses, undecodable PDFs,
/// and documents whose text trims to empty.
pub async fn fetch_and_extract_text(
    http: &reqwest::Client,
    file_url: &str,
) -> Result<String, ExtractError> {
    let response = http.get(file_url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractError::Status(status.as_u16()));
    }

    let bytes: bytes::Bytes = response.bytes().await?;
    debug!("Fetched {} bytes from {file_url}", bytes.len());

    // PDF decoding is CPU-bound; keep it off the async worker threads.
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ExtractError::Decode(e.to_string()))?
        .map_err(|e| ExtractError::Decode(e.to_string()))?;

    ensure_non_empty(text)
}

/// Empty or whitespace-only text is a failure, not a valid extraction result.
fn ensure_non_empty(text: String) -> Result<String, ExtractError> {
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyContent);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_non_empty_accepts_text() {
        let text = "Quarterly report\n\nRevenue grew 12%.".to_string();
        assert_eq!(ensure_non_empty(text.clone()).unwrap(), text);
    }

    #[test]
    fn test_ensure_non_empty_rejects_empty_string() {
        assert!(matches!(
            ensure_non_empty(String::new()),
            Err(ExtractError::EmptyContent)
        ));
    }

    #[test]
    fn test_ensure_non_empty_rejects_whitespace_only() {
        assert!(matches!(
            ensure_non_empty("  \n\t  ".to_string()),
            Err(ExtractError::EmptyContent)
        ));
    }
}
