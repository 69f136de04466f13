// Résumé analysis engine.
// Pipeline: validate → extract text → sections → skill corpus → skills + experience → questions.
// No learned models; every stage is a deterministic function of the text and the static tables.

pub mod analyzer;
pub mod corpus;
pub mod error;
pub mod experience;
pub mod extract;
pub mod handlers;
pub mod patterns;
pub mod questions;
pub mod sections;
pub mod skills;
pub mod vocabulary;

pub use analyzer::{AnalyzerSettings, ResumeAnalyzer};
pub use error::AnalysisError;
pub use extract::{PdfTextExtractor, TextExtractor};
