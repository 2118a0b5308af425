//! Document text extraction — turns an uploaded résumé file into plain text
//! for the analyzer.
//!
//! Default: `PdfTextExtractor` (pdf-extract, runs on the blocking pool).
//! `AppState` holds an `Arc<dyn TextExtractor>` so tests can swap in a stub.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: Vec<u8>) -> Result<String, AppError>;
}

pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, document: Vec<u8>) -> Result<String, AppError> {
        let size = document.len();
        // pdf-extract is synchronous and can panic on malformed input.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    AppError::Extraction("PDF parser panicked".to_string())
                } else {
                    AppError::Internal(e.into())
                }
            })?
            .map_err(|e| AppError::Extraction(format!("Failed to read PDF: {e}")))?;

        debug!(bytes = size, chars = text.len(), "Extracted text from PDF");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_are_an_extraction_error() {
        let result = PdfTextExtractor
            .extract(b"definitely not a pdf".to_vec())
            .await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
