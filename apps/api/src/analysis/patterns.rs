//! Pattern compiler: one boundary-safe, case-insensitive matcher per vocabulary term.
//!
//! The `regex` crate has no lookaround, so the boundary is expressed as a
//! non-word character (or text edge) on each side. Only existence is ever
//! asked of these patterns, so consuming the neighbour is harmless.

use regex::Regex;

use crate::analysis::vocabulary::SkillCategory;

/// A compiled matcher for one canonical term.
#[derive(Debug, Clone)]
pub struct TermPattern {
    pub term: &'static str,
    regex: Regex,
}

impl TermPattern {
    pub fn compile(term: &'static str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(&term.to_lowercase());
        let pattern = format!(r"(?i)(?:^|[^A-Za-z0-9_]){escaped}(?:[^A-Za-z0-9_]|$)");
        Ok(Self {
            term,
            regex: Regex::new(&pattern)?,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// All compiled patterns for one skill category, in catalog order.
#[derive(Debug, Clone)]
pub struct CategoryPatterns {
    pub category: SkillCategory,
    pub patterns: Vec<TermPattern>,
}

/// Compiles the category table in order. Fails only on an unbuildable term.
pub fn compile_catalog(
    catalog: &[(SkillCategory, &[&'static str])],
) -> Result<Vec<CategoryPatterns>, regex::Error> {
    catalog
        .iter()
        .map(|(category, terms)| {
            Ok(CategoryPatterns {
                category: *category,
                patterns: compile_terms(terms)?,
            })
        })
        .collect()
}

pub fn compile_terms(terms: &[&'static str]) -> Result<Vec<TermPattern>, regex::Error> {
    terms.iter().copied().map(TermPattern::compile).collect()
}
