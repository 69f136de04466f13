//! Text extraction: the only blocking step of an analysis run.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default is `PdfTextExtractor`.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::warn;

use crate::analysis::error::AnalysisError;

/// Turns raw document bytes into plain text. How it decodes is its own business.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Bytes) -> Result<String, AnalysisError>;
}

/// `pdf-extract` backed extractor. Decoding is CPU-bound and runs on the
/// blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<String, AnalysisError> {
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                // pdf-extract panics on some malformed files; the join error carries it.
                warn!("PDF extraction task failed: {e}");
                AnalysisError::TextExtraction("the document could not be decoded".to_string())
            })?
            .map_err(|e| AnalysisError::TextExtraction(e.to_string()))
    }
}
