use thiserror::Error;

/// Terminal failures of one analysis run. Nothing past extraction can fail.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Only PDF files are accepted (got '{0}')")]
    InvalidFileType(String),

    #[error("File exceeds the {limit} byte limit (at least {size} bytes)")]
    FileTooLarge { size: usize, limit: usize },

    #[error("Could not extract text from PDF: {0}")]
    TextExtraction(String),
}

impl AnalysisError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::InvalidFileType(_) => "INVALID_FILE_TYPE",
            AnalysisError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AnalysisError::TextExtraction(_) => "TEXT_EXTRACTION_FAILED",
        }
    }
}
