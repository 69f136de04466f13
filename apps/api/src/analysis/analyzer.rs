//! Pipeline orchestrator: validation, extraction, then the pure text pipeline.
//!
//! `ResumeAnalyzer` owns every table built at startup. It is shared as
//! `Arc<ResumeAnalyzer>` and only ever read, so concurrent runs need no locks.

use std::collections::HashSet;

use bytes::Bytes;
use chrono::{Datelike, Utc};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::corpus::{resolve_skill_corpus, TextCorpus};
use crate::analysis::error::AnalysisError;
use crate::analysis::experience::estimate_experience_years;
use crate::analysis::extract::TextExtractor;
use crate::analysis::patterns::{compile_catalog, compile_terms, CategoryPatterns, TermPattern};
use crate::analysis::questions::{select_questions, QuestionBank};
use crate::analysis::sections::{detect_sections, SectionMap, SynonymIndex};
use crate::analysis::skills::{match_soft_skills, match_technical_skills, SkillMatches};
use crate::analysis::vocabulary::{SectionName, SKILL_CATALOG, SOFT_SKILLS, TOOL_CATEGORIES};
use crate::models::analysis::{AnalysisResult, TechnicalSkills};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_HEADER_MAX_CHARS: usize = 80;
pub const DEFAULT_FALLBACK_WINDOW: usize = 15;
pub const DEFAULT_MAX_QUESTIONS: usize = 10;

/// Tunable thresholds. Defaults are the empirically chosen values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerSettings {
    pub max_upload_bytes: usize,
    /// Longest trimmed line still considered a section header.
    pub header_max_chars: usize,
    /// Lines collected from each fallback trigger line, trigger included.
    pub fallback_window: usize,
    pub max_questions: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            header_max_chars: DEFAULT_HEADER_MAX_CHARS,
            fallback_window: DEFAULT_FALLBACK_WINDOW,
            max_questions: DEFAULT_MAX_QUESTIONS,
        }
    }
}

pub struct ResumeAnalyzer {
    settings: AnalyzerSettings,
    synonyms: SynonymIndex,
    skill_patterns: Vec<CategoryPatterns>,
    soft_patterns: Vec<TermPattern>,
    questions: QuestionBank,
}

impl ResumeAnalyzer {
    pub fn new(settings: AnalyzerSettings) -> Result<Self, regex::Error> {
        Ok(Self {
            settings,
            synonyms: SynonymIndex::build(),
            skill_patterns: compile_catalog(SKILL_CATALOG)?,
            soft_patterns: compile_terms(SOFT_SKILLS)?,
            questions: QuestionBank::build(),
        })
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Rejects anything that is not a `.pdf` within the size limit.
    pub fn validate_upload(&self, filename: &str, size: usize) -> Result<(), AnalysisError> {
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(AnalysisError::InvalidFileType(filename.to_string()));
        }
        if size > self.settings.max_upload_bytes {
            return Err(AnalysisError::FileTooLarge {
                size,
                limit: self.settings.max_upload_bytes,
            });
        }
        Ok(())
    }

    /// Full run for one uploaded document: validate, extract, analyze.
    pub async fn analyze_upload(
        &self,
        extractor: &dyn TextExtractor,
        filename: &str,
        bytes: Bytes,
    ) -> Result<AnalysisResult, AnalysisError> {
        let analysis_id = Uuid::new_v4();
        let span = info_span!("analysis", %analysis_id, filename);

        async {
            self.validate_upload(filename, bytes.len())?;
            let text = extractor.extract(bytes).await?;
            let corpus = TextCorpus::new(text);
            if corpus.is_blank() {
                warn!("Extracted text is empty; result will be empty");
            }
            debug!(lines = corpus.lines().len(), "Text extracted");
            Ok::<_, AnalysisError>(self.analyze_text(&corpus))
        }
        .instrument(span)
        .await
    }

    /// The pure part of the pipeline. Total over any input.
    pub fn analyze_text(&self, corpus: &TextCorpus) -> AnalysisResult {
        self.analyze_text_at(corpus, Utc::now().year())
    }

    pub(crate) fn analyze_text_at(&self, corpus: &TextCorpus, current_year: i32) -> AnalysisResult {
        let sections = detect_sections(corpus, &self.synonyms, self.settings.header_max_chars);
        info!("Detected sections: {:?}", sections.keys());
        for (key, text) in sections.iter() {
            debug!(section = key.as_str(), chars = text.len(), "Section captured");
        }

        let (source, skill_corpus) =
            resolve_skill_corpus(corpus, &sections, self.settings.fallback_window);
        info!(
            "Skill corpus from {:?} ({} chars)",
            source,
            skill_corpus.len()
        );

        let tech = match_technical_skills(&self.skill_patterns, &skill_corpus);
        for (category, skills) in tech.iter().filter(|(_, s)| !s.is_empty()) {
            debug!(category = category.as_str(), "Matched {:?}", skills);
        }
        let soft_skills = match_soft_skills(&self.soft_patterns, &skill_corpus, corpus.full_text());

        let experience_years = self.estimate_experience(corpus, &sections, current_year);

        let generated_questions =
            select_questions(&tech, &self.questions, self.settings.max_questions);
        let tools_frameworks = collect_tools(&tech);

        info!(
            skills = tech.total(),
            soft = soft_skills.len(),
            experience_years,
            questions = generated_questions.len(),
            "Analysis complete"
        );

        AnalysisResult {
            technical_skills: TechnicalSkills::from(&tech),
            tools_frameworks,
            soft_skills,
            detected_experience_years: experience_years,
            generated_questions,
        }
    }

    /// Experience section first, whole document second, 0 if both are unknown.
    fn estimate_experience(
        &self,
        corpus: &TextCorpus,
        sections: &SectionMap,
        current_year: i32,
    ) -> u32 {
        let from_section = sections.section(SectionName::Experience).and_then(|text| {
            debug!("Experience section length: {} chars", text.len());
            estimate_experience_years(text, current_year)
        });
        from_section
            .or_else(|| estimate_experience_years(corpus.full_text(), current_year))
            .unwrap_or(0)
    }
}

/// Flattens the tool categories in order, dropping case-insensitive repeats.
fn collect_tools(tech: &SkillMatches) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    TOOL_CATEGORIES
        .iter()
        .flat_map(|category| tech.get(*category))
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .cloned()
        .collect()
}
