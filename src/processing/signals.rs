//! Heuristic resume signals: experience years, education, quantified achievements

use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};

const EDUCATION_KEYWORDS: &[&str] = &["bachelor", "master", "phd", "degree", "university", "college"];

/// Signals derived from the resume text alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSignals {
    pub resume_length: usize,
    pub experience_years: u32,
    #[serde(rename = "educationLevel")]
    pub education_mentioned: bool,
    #[serde(rename = "hasQuantifiableAchievements")]
    pub has_quantifiable_metrics: bool,
}

pub struct SignalExtractor {
    experience_regex: Regex,
    metric_patterns: RegexSet,
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalExtractor {
    pub fn new() -> Self {
        let experience_regex = Regex::new(r"(?i)([0-9]+)\+?\s*(?:years?|yrs?)")
            .expect("Invalid experience regex");

        let metric_patterns = RegexSet::new([
            r"[0-9]+%",
            r"\$[0-9]+",
            r"(?i)[0-9]+\s*(?:million|thousand|billion)",
            r"(?i)increased.*[0-9]",
            r"(?i)reduced.*[0-9]",
            r"(?i)improved.*[0-9]",
        ])
        .expect("Invalid metric regex set");

        Self {
            experience_regex,
            metric_patterns,
        }
    }

    pub fn extract(&self, resume: &str) -> ResumeSignals {
        ResumeSignals {
            resume_length: resume.chars().count(),
            experience_years: self.experience_years(resume),
            education_mentioned: has_education_mention(resume),
            has_quantifiable_metrics: self.has_quantifiable_metrics(resume),
        }
    }

    /// Largest "N years" / "N+ yrs" figure in the text, or 0.
    ///
    /// Figures too large for `u32` saturate.
    pub fn experience_years(&self, resume: &str) -> u32 {
        self.experience_regex
            .captures_iter(resume)
            .filter_map(|cap| cap.get(1))
            .map(|digits| digits.as_str().parse::<u32>().unwrap_or(u32::MAX))
            .max()
            .unwrap_or(0)
    }

    pub fn has_quantifiable_metrics(&self, resume: &str) -> bool {
        self.metric_patterns.is_match(resume)
    }
}

pub fn has_education_mention(resume: &str) -> bool {
    let lower = resume.to_lowercase();
    EDUCATION_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_takes_maximum() {
        let extractor = SignalExtractor::new();
        assert_eq!(extractor.experience_years("5 years of experience, 10+ yrs in management"), 10);
        assert_eq!(extractor.experience_years("3yr contract, 1 YEAR internship"), 3);
        assert_eq!(extractor.experience_years("no numbers here"), 0);
        assert_eq!(extractor.experience_years(""), 0);
    }

    #[test]
    fn test_experience_saturates_overflowing_numbers() {
        let extractor = SignalExtractor::new();
        assert_eq!(extractor.experience_years("99999999999999 years, 7 years"), u32::MAX);
        assert_eq!(extractor.experience_years("99999999999 years"), u32::MAX);
    }

    #[test]
    fn test_education_mention() {
        assert!(has_education_mention("B.Sc. from State University"));
        assert!(has_education_mention("PhD in physics"));
        assert!(!has_education_mention("Self-taught engineer"));
    }

    #[test]
    fn test_quantifiable_metrics() {
        let extractor = SignalExtractor::new();
        assert!(extractor.has_quantifiable_metrics("increased revenue by 40%"));
        assert!(extractor.has_quantifiable_metrics("Saved $200k annually"));
        assert!(extractor.has_quantifiable_metrics("Served 3 million users"));
        assert!(extractor.has_quantifiable_metrics("Reduced build time from 20 to 5 minutes"));
        assert!(!extractor.has_quantifiable_metrics("worked on various projects"));
    }

    #[test]
    fn test_action_verb_needs_digit_on_same_line() {
        let extractor = SignalExtractor::new();
        assert!(!extractor.has_quantifiable_metrics("Improved onboarding\nTeam of 4"));
    }

    #[test]
    fn test_extract_all_signals() {
        let extractor = SignalExtractor::new();
        let signals = extractor.extract("8+ yrs. Master degree. Improved uptime to 99.9%");

        assert_eq!(
            signals,
            ResumeSignals {
                resume_length: 47,
                experience_years: 8,
                education_mentioned: true,
                has_quantifiable_metrics: true,
            }
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(ResumeSignals::default()).unwrap();
        assert!(json.get("resumeLength").is_some());
        assert!(json.get("experienceYears").is_some());
        assert!(json.get("educationLevel").is_some());
        assert!(json.get("hasQuantifiableAchievements").is_some());
    }
}
