//! Weighted match score from word overlap and skill overlap

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Relative weights of the two overlap ratios.
///
/// Skill overlap weighs more than generic word overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub word: f64,
    pub skill: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self { word: 0.4, skill: 0.6 }
    }
}

/// Share of job tokens covered by resume tokens.
///
/// Resume tokens count with their multiplicity against the distinct job tokens, so the
/// ratio can exceed 1 for repetitive resumes; the final score is clamped instead.
pub fn word_match_ratio(resume_tokens: &[String], job_tokens: &[String]) -> f64 {
    if job_tokens.is_empty() {
        return 0.0;
    }

    let job_set: HashSet<&str> = job_tokens.iter().map(String::as_str).collect();
    let matching = resume_tokens
        .iter()
        .filter(|token| job_set.contains(token.as_str()))
        .count();

    matching as f64 / job_tokens.len() as f64
}

/// Share of job skills that the resume also lists.
pub fn skill_match_ratio(resume_skills: &[&str], job_skills: &[&str]) -> f64 {
    if job_skills.is_empty() {
        return 0.0;
    }

    let matching = resume_skills
        .iter()
        .filter(|rs| job_skills.iter().any(|js| js.eq_ignore_ascii_case(rs)))
        .count();

    matching as f64 / job_skills.len() as f64
}

/// Match score in `0..=100` with the default weights.
pub fn score(
    resume_tokens: &[String],
    job_tokens: &[String],
    resume_skills: &[&str],
    job_skills: &[&str],
) -> u8 {
    score_with_weights(
        &ScoringWeights::default(),
        resume_tokens,
        job_tokens,
        resume_skills,
        job_skills,
    )
}

pub fn score_with_weights(
    weights: &ScoringWeights,
    resume_tokens: &[String],
    job_tokens: &[String],
    resume_skills: &[&str],
    job_skills: &[&str],
) -> u8 {
    let word_ratio = word_match_ratio(resume_tokens, job_tokens);
    let skill_ratio = skill_match_ratio(resume_skills, job_skills);

    let raw = word_ratio * weights.word + skill_ratio * weights.skill;
    let scaled = (raw * 100.0).round();

    log::debug!(
        "word ratio {:.3}, skill ratio {:.3}, raw score {:.1}",
        word_ratio,
        skill_ratio,
        scaled
    );

    // NaN (from non-finite weights) also clamps to 0 through the `as` cast
    scaled.clamp(0.0, 100.0) as u8
}
