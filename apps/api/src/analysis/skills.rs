//! Skill matcher: runs the compiled vocabulary against a resolved corpus.

use std::collections::HashSet;

use crate::analysis::patterns::{CategoryPatterns, TermPattern};
use crate::analysis::vocabulary::SkillCategory;

/// Matched technical skills per category, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMatches {
    categories: Vec<(SkillCategory, Vec<String>)>,
}

impl SkillMatches {
    /// Matched skills for `category`, empty if none (or category unknown).
    pub fn get(&self, category: SkillCategory) -> &[String] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, skills)| skills.as_slice())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        self.categories.iter().map(|(c, s)| (*c, s.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|(_, s)| s.len()).sum()
    }
}

impl FromIterator<(SkillCategory, Vec<String>)> for SkillMatches {
    fn from_iter<I: IntoIterator<Item = (SkillCategory, Vec<String>)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

/// Tests every category's patterns against `text`. Categories are independent:
/// a term listed in two categories is reported in both.
pub fn match_technical_skills(catalog: &[CategoryPatterns], text: &str) -> SkillMatches {
    catalog
        .iter()
        .map(|entry| (entry.category, match_terms(&entry.patterns, text)))
        .collect()
}

/// Soft skills found in the skill corpus first, then any further ones found
/// anywhere in the document.
pub fn match_soft_skills(patterns: &[TermPattern], skill_corpus: &str, document: &str) -> Vec<String> {
    let mut found = match_terms(patterns, skill_corpus);
    let mut seen: HashSet<String> = found.iter().map(|s| s.to_lowercase()).collect();
    for skill in match_terms(patterns, document) {
        if seen.insert(skill.to_lowercase()) {
            found.push(skill);
        }
    }
    found
}

fn match_terms(patterns: &[TermPattern], text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    patterns
        .iter()
        .filter(|p| p.is_match(text))
        .filter(|p| seen.insert(p.term.to_lowercase()))
        .map(|p| p.term.to_string())
        .collect()
}
