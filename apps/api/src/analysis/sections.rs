//! Section detector: splits a résumé into labelled sections using the
//! synonym table.
//!
//! A line is a header only if it is short and normalizes to a known synonym.
//! Long lines are never headers, even when their text is a synonym; that length
//! cap is the only thing separating a header from prose.

use std::collections::HashMap;

use crate::analysis::corpus::TextCorpus;
use crate::analysis::vocabulary::{SectionName, SECTION_SYNONYMS};

/// Reverse lookup from normalized synonym to canonical section.
#[derive(Debug, Clone)]
pub struct SynonymIndex {
    map: HashMap<String, SectionName>,
}

impl SynonymIndex {
    pub fn build() -> Self {
        let map = SECTION_SYNONYMS
            .iter()
            .flat_map(|(section, synonyms)| {
                synonyms
                    .iter()
                    .map(move |syn| (normalize_header(syn), *section))
            })
            .collect();
        Self { map }
    }

    pub fn lookup(&self, line: &str) -> Option<SectionName> {
        self.map.get(&normalize_header(line)).copied()
    }
}

/// Collapses whitespace, drops one trailing colon and lowercases.
pub fn normalize_header(line: &str) -> String {
    let trimmed = line.trim();
    let without_colon = trimmed.strip_suffix(':').unwrap_or(trimmed);
    without_colon
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Key of a captured section: untitled text or a canonical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Body,
    Named(SectionName),
}

impl SectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Body => "_body",
            SectionKey::Named(name) => name.as_str(),
        }
    }
}

/// Captured section text in first-seen order. Repeated sections are
/// concatenated, never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(SectionKey, String)>,
}

impl SectionMap {
    fn append(&mut self, key: SectionKey, content: &str) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => {
                existing.push('\n');
                existing.push_str(content);
            }
            None => self.entries.push((key, content.to_string())),
        }
    }

    pub fn get(&self, key: SectionKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn section(&self, name: SectionName) -> Option<&str> {
        self.get(SectionKey::Named(name))
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Splits `corpus` into sections.
///
/// With no recognised header the whole text lands under `_body`. Otherwise the
/// lines strictly between consecutive headers belong to the earlier header,
/// and anything before the first header is `_body`. Blank captures are dropped.
pub fn detect_sections(
    corpus: &TextCorpus,
    index: &SynonymIndex,
    header_max_chars: usize,
) -> SectionMap {
    let lines = corpus.lines();

    let headers: Vec<(usize, SectionName)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let stripped = line.trim();
            if stripped.is_empty() || stripped.chars().count() > header_max_chars {
                return None;
            }
            index.lookup(stripped).map(|section| (idx, section))
        })
        .collect();

    let mut sections = SectionMap::default();

    if headers.is_empty() {
        sections.append(SectionKey::Body, corpus.full_text());
        return sections;
    }

    // Each header closes the block opened by the previous one; a virtual
    // header past the last line closes the final block.
    let mut start = 0;
    let mut label = SectionKey::Body;
    for (header_idx, section) in headers
        .iter()
        .map(|(i, s)| (*i, Some(*s)))
        .chain(std::iter::once((lines.len(), None)))
    {
        let content = lines[start..header_idx].join("\n");
        let content = content.trim();
        if !content.is_empty() {
            sections.append(label, content);
        }
        if let Some(section) = section {
            start = header_idx + 1;
            label = SectionKey::Named(section);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> SectionMap {
        detect_sections(&TextCorpus::new(text), &SynonymIndex::build(), 80)
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Core   Competencies: "), "core competencies");
        assert_eq!(normalize_header("SKILLS"), "skills");
        assert_eq!(normalize_header("Skills::"), "skills:");
    }

    #[test]
    fn test_synonym_lookup() {
        let index = SynonymIndex::build();
        assert_eq!(index.lookup("Core Competencies"), Some(SectionName::Skills));
        assert_eq!(
            index.lookup("PROFESSIONAL EXPERIENCE"),
            Some(SectionName::Experience)
        );
        assert_eq!(index.lookup("Key Projects:"), Some(SectionName::Projects));
        assert_eq!(index.lookup("Professional Summary"), None);
    }

    #[test]
    fn test_no_headers_returns_whole_body() {
        let text = "Jane Doe\nBuilt things in Rust";
        let sections = detect(text);
        assert_eq!(sections.keys(), vec!["_body"]);
        assert_eq!(sections.get(SectionKey::Body), Some(text));
    }

    #[test]
    fn test_core_competencies_block_is_skills() {
        let sections = detect(
            "John Doe\n\nCore Competencies\nPython, FastAPI, PostgreSQL, REST API\n\nEDUCATION\nB.Tech 2015 - 2019",
        );
        assert_eq!(sections.keys(), vec!["_body", "skills", "education"]);
        assert_eq!(
            sections.section(SectionName::Skills),
            Some("Python, FastAPI, PostgreSQL, REST API")
        );
        assert_eq!(sections.get(SectionKey::Body), Some("John Doe"));
    }

    #[test]
    fn test_repeated_section_is_concatenated() {
        let sections = detect("Skills\nPython\nExperience\nAcme\nTechnical Skills\nDocker");
        assert_eq!(sections.section(SectionName::Skills), Some("Python\nDocker"));
        assert_eq!(sections.section(SectionName::Experience), Some("Acme"));
    }

    #[test]
    fn test_empty_sections_are_dropped() {
        let sections = detect("Skills\n\nExperience\nAcme");
        assert_eq!(sections.section(SectionName::Skills), None);
        assert_eq!(sections.keys(), vec!["experience"]);
    }

    #[test]
    fn test_long_line_is_never_a_header() {
        let long = format!("Technical{}Skills", " ".repeat(80));
        let sections = detect(&format!("{long}\nPython"));
        assert_eq!(sections.keys(), vec!["_body"]);
    }

    #[test]
    fn test_header_length_threshold_is_configurable() {
        let corpus = TextCorpus::new("Work Experience\nAcme");
        let sections = detect_sections(&corpus, &SynonymIndex::build(), 5);
        assert_eq!(sections.keys(), vec!["_body"]);
    }

    #[test]
    fn test_every_non_header_line_is_covered_once() {
        let text = "Jane\nSkills\nPython\nGo\nExperience\nAcme 2019 - 2021\n\nEducation\nMIT\nSkills\nDocker";
        let sections = detect(text);
        let index = SynonymIndex::build();

        let mut captured: Vec<String> = sections
            .iter()
            .flat_map(|(_, v)| v.lines().map(String::from).collect::<Vec<_>>())
            .filter(|l| !l.trim().is_empty())
            .collect();
        let mut expected: Vec<String> = text
            .lines()
            .filter(|l| !l.trim().is_empty() && index.lookup(l).is_none())
            .map(String::from)
            .collect();
        captured.sort();
        expected.sort();
        assert_eq!(captured, expected);
    }

    #[test]
    fn test_empty_input() {
        let sections = detect("");
        assert_eq!(sections.get(SectionKey::Body), Some(""));
        assert_eq!(sections.keys().len(), 1);
    }
}
