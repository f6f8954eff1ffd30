//! Skill taxonomy and substring-based skill detection

use crate::error::{Result, ResumeMatchError};
use aho_corasick::{AhoCorasick, MatchKind};

/// Canonical skill names recognised by the matcher, in reporting order.
pub const SKILL_TAXONOMY: &[&str] = &[
    // Languages
    "JavaScript", "TypeScript", "Python", "Java", "C++", "C#", "Ruby", "Go", "Rust", "PHP",
    // Frameworks
    "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring", "Laravel",
    // Cloud and delivery
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Jenkins", "CI/CD", "Git", "GitHub",
    // Data stores and APIs
    "SQL", "MongoDB", "PostgreSQL", "MySQL", "Redis", "GraphQL", "REST API",
    // Data and ML
    "Machine Learning", "AI", "Data Science", "TensorFlow", "PyTorch",
    // Process and soft skills
    "Agile", "Scrum", "Leadership", "Team Management", "Communication",
    // Frontend
    "HTML", "CSS", "SASS", "Tailwind", "Bootstrap", "Webpack", "Vite",
    // Testing
    "Testing", "Jest", "Mocha", "Cypress", "Selenium", "Unit Testing",
    // Architecture and ops
    "Microservices", "System Design", "Architecture", "DevOps", "Linux",
];

/// Skills that count as a modern web stack in feedback.
pub const MODERN_STACK_SKILLS: &[&str] = &["React", "Angular", "Vue", "Node.js"];

/// Finds taxonomy entries contained anywhere in a text.
///
/// Matching is plain case-insensitive substring containment, so an entry embedded in a
/// longer word is reported too ("Java" inside "JavaScript", "AI" inside "maintain").
/// Every taxonomy entry is ASCII, so ASCII case folding is exact for them.
pub struct SkillMatcher {
    automaton: AhoCorasick,
}

impl SkillMatcher {
    pub fn new() -> Result<Self> {
        // Standard semantics are required for overlapping search, which reports
        // every entry that occurs, including ones nested inside other entries.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(SKILL_TAXONOMY)
            .map_err(|e| ResumeMatchError::Configuration(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { automaton })
    }

    /// Taxonomy entries present in `text`, in taxonomy order.
    pub fn extract_skills(&self, text: &str) -> Vec<&'static str> {
        let mut found = vec![false; SKILL_TAXONOMY.len()];

        for mat in self.automaton.find_overlapping_iter(text) {
            found[mat.pattern().as_usize()] = true;
        }

        SKILL_TAXONOMY
            .iter()
            .zip(found)
            .filter_map(|(skill, present)| present.then_some(*skill))
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        SKILL_TAXONOMY.len()
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new().expect("Failed to create default skill matcher")
    }
}
