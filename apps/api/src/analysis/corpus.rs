//! Text corpus and skill-corpus resolution.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::sections::SectionMap;
use crate::analysis::vocabulary::SectionName;

/// Extracted document text, kept both joined and split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCorpus {
    text: String,
    lines: Vec<String>,
}

impl TextCorpus {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text.lines().map(String::from).collect();
        Self { text, lines }
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Words that usually sit next to an inline skill list ("Programming Languages: ...").
static SKILL_TRIGGER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(programming|languages?|software|tools?|technologies|frameworks?|librar(?:y|ies))\b",
    )
    .expect("skill trigger regex")
});

/// Collects a fixed window of lines after every trigger line, never repeating a line.
pub fn fallback_skill_window(lines: &[String], window: usize) -> String {
    let mut collected: Vec<&str> = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();

    for (idx, line) in lines.iter().enumerate() {
        if !SKILL_TRIGGER_RE.is_match(line) {
            continue;
        }
        for target in idx..idx.saturating_add(window).min(lines.len()) {
            if seen.insert(target) {
                collected.push(&lines[target]);
            }
        }
    }

    collected.join("\n")
}

/// Where the skill matcher's input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusSource {
    SkillsSection,
    FallbackWindow,
    FullDocument,
}

/// Picks the text fed to the skill matcher: skills section, then fallback
/// window, then the whole document. Exactly one wins.
pub fn resolve_skill_corpus(
    corpus: &TextCorpus,
    sections: &SectionMap,
    window: usize,
) -> (CorpusSource, String) {
    if let Some(skills) = sections.section(SectionName::Skills) {
        if !skills.trim().is_empty() {
            return (CorpusSource::SkillsSection, skills.to_string());
        }
    }

    let fallback = fallback_skill_window(corpus.lines(), window);
    if !fallback.trim().is_empty() {
        return (CorpusSource::FallbackWindow, fallback);
    }

    (CorpusSource::FullDocument, corpus.full_text().to_string())
}
