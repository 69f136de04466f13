use std::sync::Arc;

use crate::analysis::{ResumeAnalyzer, TextExtractor};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Vocabulary tables and compiled patterns, built once at startup and read-only.
    pub analyzer: Arc<ResumeAnalyzer>,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
