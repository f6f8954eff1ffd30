//! Analysis engine combining tokens, skills, keywords and heuristic signals

use crate::error::Result;
use crate::processing::feedback::{self, FeedbackInput};
use crate::processing::keywords::{self, KeywordMatch};
use crate::processing::scorer::{self, ScoringWeights};
use crate::processing::signals::{ResumeSignals, SignalExtractor};
use crate::processing::skills::SkillMatcher;
use crate::processing::tokenizer::tokenize;
use serde::{Deserialize, Serialize};

pub const MAX_MISSING_SKILLS: usize = 10;

/// Outcome of one resume / job description comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall match score (0 to 100)
    pub match_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub keyword_match: KeywordMatch,
    #[serde(rename = "analysis")]
    pub signals: ResumeSignals,
}

/// Stateless analyzer. Build once and share; `analyze` only reads its matchers.
pub struct Analyzer {
    skill_matcher: SkillMatcher,
    signal_extractor: SignalExtractor,
    weights: ScoringWeights,
}

impl Analyzer {
    pub fn new() -> Result<Self> {
        Self::with_weights(ScoringWeights::default())
    }

    pub fn with_weights(weights: ScoringWeights) -> Result<Self> {
        Ok(Self {
            skill_matcher: SkillMatcher::new()?,
            signal_extractor: SignalExtractor::new(),
            weights,
        })
    }

    pub fn analyze(&self, resume: &str, job_description: &str) -> AnalysisResult {
        let resume_tokens = tokenize(resume);
        let job_tokens = tokenize(job_description);

        let resume_skills = self.skill_matcher.extract_skills(resume);
        let job_skills = self.skill_matcher.extract_skills(job_description);

        let match_score = scorer::score_with_weights(
            &self.weights,
            &resume_tokens,
            &job_tokens,
            &resume_skills,
            &job_skills,
        );

        let (matched_skills, missing_skills): (Vec<&'static str>, Vec<&'static str>) = job_skills
            .iter()
            .copied()
            .partition(|js| resume_skills.iter().any(|rs| rs.eq_ignore_ascii_case(js)));

        let signals = self.signal_extractor.extract(resume);
        let keyword_match = keywords::match_keywords(resume, job_description);

        log::debug!(
            "{} resume tokens, {} job tokens, {} resume skills, {} job skills, {} missing",
            resume_tokens.len(),
            job_tokens.len(),
            resume_skills.len(),
            job_skills.len(),
            missing_skills.len()
        );

        let feedback = feedback::synthesize(&FeedbackInput {
            resume,
            job_description,
            matched_skills: &matched_skills,
            missing_skills: &missing_skills,
            signals: &signals,
            match_score,
        });

        AnalysisResult {
            match_score,
            strengths: feedback.strengths,
            weaknesses: feedback.weaknesses,
            missing_skills: missing_skills
                .iter()
                .take(MAX_MISSING_SKILLS)
                .map(|s| s.to_string())
                .collect(),
            suggestions: feedback.suggestions,
            keyword_match,
            signals,
        }
    }

    /// Signals alone, for callers that obtained the rest of the analysis elsewhere.
    pub fn signals(&self, resume: &str) -> ResumeSignals {
        self.signal_extractor.extract(resume)
    }

    pub fn skill_count(&self) -> usize {
        self.skill_matcher.skill_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new().unwrap()
    }

    #[test]
    fn test_empty_inputs_degrade_gracefully() {
        let result = analyzer().analyze("", "");

        assert_eq!(result.match_score, 0);
        assert_eq!(result.strengths, vec![feedback::FALLBACK_STRENGTH]);
        assert!(!result.weaknesses.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.keyword_match.matched.is_empty());
        assert!(result.keyword_match.missing.is_empty());
        assert_eq!(result.signals, ResumeSignals::default());
    }

    #[test]
    fn test_full_skill_overlap_scenario() {
        let resume = "5 years experience with JavaScript, React, and AWS. Increased performance by 40%.";
        let job = "Looking for a JavaScript developer with React and AWS experience, 3+ years.";

        let result = analyzer().analyze(resume, job);

        assert_eq!(result.match_score, 88);
        assert!(result.missing_skills.is_empty());
        assert!(result.signals.has_quantifiable_metrics);
        assert_eq!(result.signals.experience_years, 5);
        assert_eq!(result.signals.resume_length, 81);
        assert_eq!(
            result.strengths,
            vec![
                "5+ years of relevant experience",
                "Includes quantifiable achievements and metrics",
                "Modern technology stack experience",
            ]
        );
        assert_eq!(
            result.weaknesses,
            vec![
                "Resume appears too brief, consider adding more detail",
                "Consider adding relevant project examples",
            ]
        );
        assert_eq!(
            result.suggestions,
            vec![
                feedback::ACTION_VERBS_SUGGESTION,
                "Include relevant certifications or professional development courses",
                feedback::ATS_HEADERS_SUGGESTION,
            ]
        );
    }

    #[test]
    fn test_unrelated_resume_scenario() {
        let result = analyzer().analyze("I like cooking.", "Need a Python expert with Docker and Kubernetes skills.");

        assert_eq!(result.match_score, 0);
        assert_eq!(result.missing_skills, vec!["Python", "Docker", "Kubernetes"]);
        assert_eq!(result.keyword_match.missing, vec!["need", "python", "expert", "docker", "kubernetes", "skills"]);
        assert!(result.suggestions.contains(&"Highlight experience with: Python, Docker, Kubernetes".to_string()));
    }

    #[test]
    fn test_senior_resume_scenario() {
        let resume = "Senior engineer. Led a team of 6 building React and Node.js services on AWS with Docker, \
                      Kubernetes and PostgreSQL. Managed CI/CD pipelines in Jenkins. Reduced latency 30%. \
                      8+ yrs of experience. Bachelor degree in CS. Project: payments platform.";
        let job = "We need a senior engineer with React, Node.js, AWS, Docker, Kubernetes, PostgreSQL, Jenkins \
                   and CI/CD. Degree required. Python is a plus. Experience with microservices and system design.";

        let result = analyzer().analyze(resume, job);

        assert_eq!(result.match_score, 70);
        assert_eq!(result.missing_skills, vec!["Python", "Microservices", "System Design"]);
        assert_eq!(result.strengths[0], "Strong technical skill alignment with 9 matching skills");
        assert_eq!(result.strengths.len(), 5);
        assert_eq!(result.weaknesses, vec!["Resume appears too brief, consider adding more detail"]);
        assert_eq!(result.suggestions[0], "Highlight experience with: Python, Microservices, System Design");
        assert_eq!(
            result.keyword_match.missing,
            vec!["need", "required", "python", "plus", "microservices", "system", "design"]
        );
    }

    #[test]
    fn test_missing_skills_exclude_resume_skills_and_cap() {
        let job = "JavaScript TypeScript Python Ruby Rust PHP React Angular Vue Django Flask Spring";
        let result = analyzer().analyze("Rust and React", job);

        assert!(result.missing_skills.len() <= MAX_MISSING_SKILLS);
        assert!(!result.missing_skills.iter().any(|s| s == "Rust" || s == "React"));
        assert_eq!(result.weaknesses[0], "Missing 12 key skills mentioned in job description");
    }

    #[test]
    fn test_keyword_lists_are_disjoint() {
        let resume = "Rust services, Kafka pipelines, observability dashboards";
        let job = "Rust engineer for streaming pipelines. Kafka, Flink, observability, on-call rotation.";
        let result = analyzer().analyze(resume, job);

        for keyword in &result.keyword_match.matched {
            assert!(!result.keyword_match.missing.contains(keyword));
        }
        let total = result.keyword_match.matched.len() + result.keyword_match.missing.len();
        assert_eq!(total, keywords::rank_keywords(job).len());
    }

    #[test]
    fn test_serialized_shape() {
        let result = analyzer().analyze("Rust", "Rust");
        let json = serde_json::to_value(&result).unwrap();

        for field in ["matchScore", "strengths", "weaknesses", "missingSkills", "suggestions", "keywordMatch", "analysis"] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert!(json["keywordMatch"].get("matched").is_some());
        assert!(json["analysis"].get("experienceYears").is_some());
    }

    #[test]
    fn test_analyzer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();

        let analyzer = std::sync::Arc::new(analyzer());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = analyzer.clone();
                std::thread::spawn(move || analyzer.analyze("Rust", "Rust").match_score)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 100);
        }
    }

    #[test]
    fn test_oversized_experience_still_counts_as_senior() {
        let result = analyzer().analyze("99999999999 years building Rust services", "Rust engineer");

        assert_eq!(result.signals.experience_years, u32::MAX);
        assert!(result.strengths[0].ends_with("+ years of relevant experience"));
    }
}
