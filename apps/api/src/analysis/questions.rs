//! Question selector: turns detected skills into a capped interview plan.

use std::collections::HashMap;

use crate::analysis::skills::SkillMatches;
use crate::analysis::vocabulary::{QUESTION_BANK, QUESTION_CATEGORIES};
use crate::models::analysis::InterviewQuestion;

/// Question bank keyed by canonical skill name.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    by_skill: HashMap<&'static str, &'static [&'static str]>,
}

impl QuestionBank {
    pub fn build() -> Self {
        Self {
            by_skill: QUESTION_BANK.iter().copied().collect(),
        }
    }

    pub fn questions_for(&self, skill: &str) -> &'static [&'static str] {
        self.by_skill.get(skill).copied().unwrap_or_default()
    }
}

/// Walks eligible categories in their fixed priority order, then skills in
/// detection order, then each skill's questions in bank order. Stops the
/// moment `cap` questions are collected, so later categories may be left out
/// entirely.
pub fn select_questions(
    skills: &SkillMatches,
    bank: &QuestionBank,
    cap: usize,
) -> Vec<InterviewQuestion> {
    let mut questions = Vec::new();

    for category in QUESTION_CATEGORIES {
        for skill in skills.get(*category) {
            for text in bank.questions_for(skill) {
                if questions.len() >= cap {
                    return questions;
                }
                questions.push(InterviewQuestion {
                    question: (*text).to_string(),
                    category: skill.clone(),
                });
            }
        }
    }

    questions
}
