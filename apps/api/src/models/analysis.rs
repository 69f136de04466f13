use serde::{Deserialize, Serialize};

use crate::analysis::skills::SkillMatches;
use crate::analysis::vocabulary::SkillCategory;

/// Technical skills by category. Keys are fixed; `web` only surfaces through
/// `tools_frameworks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalSkills {
    pub languages: Vec<String>,
    pub backend: Vec<String>,
    pub frontend: Vec<String>,
    pub mobile: Vec<String>,
    pub database: Vec<String>,
    pub devops: Vec<String>,
    pub ai: Vec<String>,
    pub architecture: Vec<String>,
    pub testing: Vec<String>,
}

impl From<&SkillMatches> for TechnicalSkills {
    fn from(matches: &SkillMatches) -> Self {
        let take = |category| matches.get(category).to_vec();
        Self {
            languages: take(SkillCategory::Languages),
            backend: take(SkillCategory::Backend),
            frontend: take(SkillCategory::Frontend),
            mobile: take(SkillCategory::Mobile),
            database: take(SkillCategory::Database),
            devops: take(SkillCategory::Devops),
            ai: take(SkillCategory::Ai),
            architecture: take(SkillCategory::Architecture),
            testing: take(SkillCategory::Testing),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    /// The skill that produced this question, e.g. "Python".
    pub category: String,
}

/// Everything extracted from one résumé. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub technical_skills: TechnicalSkills,
    pub tools_frameworks: Vec<String>,
    pub soft_skills: Vec<String>,
    /// 0 means unknown.
    pub detected_experience_years: u32,
    pub generated_questions: Vec<InterviewQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_result_wire_shape() {
        let result = AnalysisResult {
            technical_skills: TechnicalSkills {
                languages: vec!["Python".to_string()],
                ..Default::default()
            },
            tools_frameworks: vec!["Docker".to_string()],
            soft_skills: vec!["Teamwork".to_string()],
            detected_experience_years: 5,
            generated_questions: vec![InterviewQuestion {
                question: "Why Python?".to_string(),
                category: "Python".to_string(),
            }],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "technical_skills": {
                    "languages": ["Python"],
                    "backend": [],
                    "frontend": [],
                    "mobile": [],
                    "database": [],
                    "devops": [],
                    "ai": [],
                    "architecture": [],
                    "testing": []
                },
                "tools_frameworks": ["Docker"],
                "soft_skills": ["Teamwork"],
                "detected_experience_years": 5,
                "generated_questions": [
                    {"question": "Why Python?", "category": "Python"}
                ]
            })
        );
    }

    #[test]
    fn test_technical_skills_from_matches_drops_web() {
        let matches: SkillMatches = vec![
            (SkillCategory::Web, vec!["HTML".to_string()]),
            (SkillCategory::Testing, vec!["JUnit".to_string()]),
        ]
        .into_iter()
        .collect();
        let skills = TechnicalSkills::from(&matches);
        assert_eq!(skills.testing, vec!["JUnit"]);
        assert!(skills.languages.is_empty());
        let value = serde_json::to_value(&skills).unwrap();
        assert!(value.get("web").is_none());
    }
}
