//! PDF text extraction for uploaded resumes.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read the PDF: {0}")]
    Unreadable(String),

    #[error("Could not extract text from the PDF.")]
    Empty,
}

/// Parses PDF bytes into plain text on the blocking pool.
///
/// A parser panic on a malformed document is reported as `Unreadable`
/// rather than taking the request task down with it.
pub async fn extract_text(document: Bytes) -> Result<String, ExtractionError> {
    if document.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let parsed = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
        .await
        .map_err(|e| ExtractionError::Unreadable(format!("parser aborted: {e}")))?;

    let text = parsed.map_err(|e| ExtractionError::Unreadable(e.to_string()))?;
    debug!("Extracted {} characters from resume", text.len());

    ensure_text(text)
}

fn ensure_text(text: String) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        Err(ExtractionError::Empty)
    } else {
        Ok(text)
    }
}
