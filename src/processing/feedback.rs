//! Rule-based strengths, weaknesses and suggestions
//!
//! Rules are evaluated in a fixed order and each contributes at most one message.
//! Thresholds and wording are stable so that reports stay comparable across runs.

use crate::processing::signals::ResumeSignals;
use crate::processing::skills::MODERN_STACK_SKILLS;

const STRONG_SKILL_ALIGNMENT_MIN: usize = 6;
const SENIOR_EXPERIENCE_YEARS: u32 = 5;
const MANY_MISSING_SKILLS: usize = 5;
const BRIEF_RESUME_CHARS: usize = 500;
const TAILORING_SCORE_THRESHOLD: u8 = 70;
const HIGHLIGHTED_MISSING_SKILLS: usize = 3;

pub const FALLBACK_STRENGTH: &str = "Resume shows relevant experience";
pub const FALLBACK_WEAKNESS: &str = "Minor improvements possible";
pub const ACTION_VERBS_SUGGESTION: &str =
    "Use action verbs at the start of bullet points (Led, Developed, Implemented)";
pub const ATS_HEADERS_SUGGESTION: &str =
    "Ensure your resume is ATS-friendly with clear section headers";

/// Everything the rules look at, computed once by the analyzer.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackInput<'a> {
    pub resume: &'a str,
    pub job_description: &'a str,
    pub matched_skills: &'a [&'static str],
    /// Full list, before the report caps it.
    pub missing_skills: &'a [&'static str],
    pub signals: &'a ResumeSignals,
    pub match_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn synthesize(input: &FeedbackInput<'_>) -> Feedback {
    let resume_lower = input.resume.to_lowercase();

    Feedback {
        strengths: strengths(input, &resume_lower),
        weaknesses: weaknesses(input, &resume_lower),
        suggestions: suggestions(input, &resume_lower),
    }
}

fn strengths(input: &FeedbackInput<'_>, resume_lower: &str) -> Vec<String> {
    let mut strengths = Vec::new();
    let signals = input.signals;

    if input.matched_skills.len() >= STRONG_SKILL_ALIGNMENT_MIN {
        strengths.push(format!(
            "Strong technical skill alignment with {} matching skills",
            input.matched_skills.len()
        ));
    }

    if signals.experience_years >= SENIOR_EXPERIENCE_YEARS {
        strengths.push(format!("{}+ years of relevant experience", signals.experience_years));
    }

    if signals.has_quantifiable_metrics {
        strengths.push("Includes quantifiable achievements and metrics".to_string());
    }

    if resume_lower.contains("lead") || resume_lower.contains("manage") {
        strengths.push("Demonstrates leadership and management experience".to_string());
    }

    if input
        .matched_skills
        .iter()
        .any(|skill| MODERN_STACK_SKILLS.contains(skill))
    {
        strengths.push("Modern technology stack experience".to_string());
    }

    if strengths.is_empty() {
        strengths.push(FALLBACK_STRENGTH.to_string());
    }
    strengths
}

fn weaknesses(input: &FeedbackInput<'_>, resume_lower: &str) -> Vec<String> {
    let mut weaknesses = Vec::new();
    let signals = input.signals;

    if input.missing_skills.len() > MANY_MISSING_SKILLS {
        weaknesses.push(format!(
            "Missing {} key skills mentioned in job description",
            input.missing_skills.len()
        ));
    }

    if !signals.has_quantifiable_metrics {
        weaknesses.push("Lacks quantifiable achievements and impact metrics".to_string());
    }

    if signals.resume_length < BRIEF_RESUME_CHARS {
        weaknesses.push("Resume appears too brief, consider adding more detail".to_string());
    }

    if !signals.education_mentioned && input.job_description.to_lowercase().contains("degree") {
        weaknesses.push("Education section may need more prominence".to_string());
    }

    if !resume_lower.contains("project") {
        weaknesses.push("Consider adding relevant project examples".to_string());
    }

    if weaknesses.is_empty() {
        weaknesses.push(FALLBACK_WEAKNESS.to_string());
    }
    weaknesses
}

fn suggestions(input: &FeedbackInput<'_>, resume_lower: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    if input.match_score < TAILORING_SCORE_THRESHOLD {
        suggestions.push("Tailor your resume more closely to the job description keywords".to_string());
    }

    if !input.missing_skills.is_empty() {
        let top: Vec<&str> = input
            .missing_skills
            .iter()
            .take(HIGHLIGHTED_MISSING_SKILLS)
            .copied()
            .collect();
        suggestions.push(format!("Highlight experience with: {}", top.join(", ")));
    }

    if !input.signals.has_quantifiable_metrics {
        suggestions.push("Add quantifiable achievements (e.g., \"Increased performance by 40%\")".to_string());
    }

    suggestions.push(ACTION_VERBS_SUGGESTION.to_string());

    if !resume_lower.contains("certification") {
        suggestions.push("Include relevant certifications or professional development courses".to_string());
    }

    suggestions.push(ATS_HEADERS_SUGGESTION.to_string());

    suggestions
}
