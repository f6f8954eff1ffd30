//! Generative analysis with rule-based fallback
//!
//! A `GenerativeClient` produces raw model text for a prompt. The service parses that
//! text into the same shape as the core `AnalysisResult`, and falls back to the core
//! whenever no client is configured or the generative path fails. Cover letters,
//! interview questions and bullet rewrites have no rule-based counterpart and need a
//! client.

use crate::error::{Result, ResumeMatchError};
use crate::llm::prompts::{PromptParams, PromptTemplates};
use crate::processing::analyzer::{AnalysisResult, Analyzer};
use crate::processing::keywords::KeywordMatch;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::OnceLock;
use std::time::Instant;

/// Text generation backend, e.g. a hosted model behind an HTTP API.
pub trait GenerativeClient {
    fn model_name(&self) -> &str;

    fn generate(&self, prompt: &str) -> impl Future<Output = anyhow::Result<String>> + Send;
}

/// Placeholder client for services running without a generative backend.
pub struct NoClient;

impl GenerativeClient for NoClient {
    fn model_name(&self) -> &str {
        "none"
    }

    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("no generative client configured")
    }
}

/// Analysis as returned by a generative model. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedAnalysis {
    pub match_score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub tone_analysis: Option<String>,
    pub ats_compatibility: Option<String>,
    pub keyword_match: KeywordMatch,
}

/// What the boundary hands to callers: the analysis plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub ai_powered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ats_compatibility: Option<String>,
}

impl AnalysisResponse {
    pub fn rule_based(result: AnalysisResult) -> Self {
        Self {
            result,
            ai_powered: false,
            tone_analysis: None,
            ats_compatibility: None,
        }
    }
}

/// Likely interview questions, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewQuestions {
    pub technical: Vec<String>,
    pub behavioral: Vec<String>,
    pub role_specific: Vec<String>,
}

impl InterviewQuestions {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.behavioral.is_empty() && self.role_specific.is_empty()
    }
}

/// Resume bullet points rewritten against a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizedBullets {
    pub optimized: Vec<String>,
}

/// Parse model output, tolerating Markdown code fences and surrounding chatter.
pub fn parse_generated_analysis(text: &str) -> Result<GeneratedAnalysis> {
    parse_generated_json(text, "analysis")
}

pub fn parse_interview_questions(text: &str) -> Result<InterviewQuestions> {
    parse_generated_json(text, "interview questions")
}

pub fn parse_optimized_bullets(text: &str) -> Result<OptimizedBullets> {
    parse_generated_json(text, "optimized bullets")
}

fn parse_generated_json<T: DeserializeOwned>(text: &str, what: &str) -> Result<T> {
    static CODE_FENCE: OnceLock<Regex> = OnceLock::new();
    let fence = CODE_FENCE.get_or_init(|| Regex::new(r"```[A-Za-z]*").expect("Invalid fence regex"));

    let unfenced = fence.replace_all(text, "");
    let trimmed = unfenced.trim();

    let json = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => {
            return Err(ResumeMatchError::InvalidResponse(
                "No JSON object found in model output".to_string(),
            ))
        }
    };

    serde_json::from_str(json)
        .map_err(|e| ResumeMatchError::InvalidResponse(format!("Malformed {} JSON: {}", what, e)))
}

fn require_documents(first: &str, second: &str, message: &str) -> Result<()> {
    if first.trim().is_empty() || second.trim().is_empty() {
        return Err(ResumeMatchError::InvalidInput(message.to_string()));
    }
    Ok(())
}

pub struct AnalysisService<C> {
    analyzer: Analyzer,
    client: Option<C>,
    prompt_templates: PromptTemplates,
}

const DOCUMENTS_REQUIRED: &str = "Resume and job description are required";

impl AnalysisService<NoClient> {
    /// Service that always answers with the rule-based analysis.
    pub fn rule_based(analyzer: Analyzer) -> Self {
        Self::new(analyzer, None)
    }
}

impl<C: GenerativeClient> AnalysisService<C> {
    pub fn new(analyzer: Analyzer, client: Option<C>) -> Self {
        Self {
            analyzer,
            client,
            prompt_templates: PromptTemplates::default(),
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Analyze both documents, preferring the generative client when one is configured.
    ///
    /// Fails only on missing input; generative failures degrade to the core analysis.
    pub async fn analyze(&self, resume: &str, job_description: &str) -> Result<AnalysisResponse> {
        require_documents(resume, job_description, DOCUMENTS_REQUIRED)?;

        if let Some(client) = &self.client {
            let start_time = Instant::now();
            match self.generate(client, resume, job_description).await {
                Ok(response) => {
                    log::info!(
                        "Generative analysis by {} completed in {}ms with score {}",
                        client.model_name(),
                        start_time.elapsed().as_millis(),
                        response.result.match_score
                    );
                    return Ok(response);
                }
                Err(e) => {
                    log::warn!("Generative analysis failed, falling back to rule-based analysis: {}", e);
                }
            }
        }

        Ok(AnalysisResponse::rule_based(self.analyzer.analyze(resume, job_description)))
    }

    /// Write a cover letter for the role. Requires a generative client.
    pub async fn generate_cover_letter(
        &self,
        resume: &str,
        job_description: &str,
        company_name: Option<&str>,
    ) -> Result<String> {
        require_documents(resume, job_description, DOCUMENTS_REQUIRED)?;
        let client = self.require_client()?;

        let prompt = self
            .prompt_templates
            .render_cover_letter(&Self::params(resume, job_description), company_name);
        let letter = client.generate(&prompt).await?;

        let letter = letter.trim();
        if letter.is_empty() {
            return Err(ResumeMatchError::InvalidResponse(
                "Model returned an empty cover letter".to_string(),
            ));
        }
        log::info!("Cover letter generated by {} ({} chars)", client.model_name(), letter.len());
        Ok(letter.to_string())
    }

    /// Likely interview questions for the candidate. Requires a generative client.
    pub async fn generate_interview_questions(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<InterviewQuestions> {
        require_documents(resume, job_description, DOCUMENTS_REQUIRED)?;
        let client = self.require_client()?;

        let prompt = self
            .prompt_templates
            .render_interview_questions(&Self::params(resume, job_description));
        let questions = parse_interview_questions(&client.generate(&prompt).await?)?;

        if questions.is_empty() {
            return Err(ResumeMatchError::InvalidResponse(
                "Model returned no interview questions".to_string(),
            ));
        }
        Ok(questions)
    }

    /// Rewrite resume bullet points for the role. Requires a generative client.
    pub async fn optimize_bullet_points(
        &self,
        bullet_points: &str,
        job_description: &str,
    ) -> Result<OptimizedBullets> {
        require_documents(
            bullet_points,
            job_description,
            "Bullet points and job description are required",
        )?;
        let client = self.require_client()?;

        let prompt = self
            .prompt_templates
            .render_bullet_optimization(bullet_points, job_description);
        parse_optimized_bullets(&client.generate(&prompt).await?)
    }

    fn require_client(&self) -> Result<&C> {
        self.client.as_ref().ok_or_else(|| {
            ResumeMatchError::UpstreamServiceUnavailable("Generative service not configured".to_string())
        })
    }

    fn params(resume: &str, job_description: &str) -> PromptParams {
        PromptParams {
            resume_content: resume.to_string(),
            job_content: job_description.to_string(),
        }
    }

    async fn generate(&self, client: &C, resume: &str, job_description: &str) -> Result<AnalysisResponse> {
        let prompt = self
            .prompt_templates
            .render_combined_analysis(&Self::params(resume, job_description));

        let raw = client.generate(&prompt).await?;
        let generated = parse_generated_analysis(&raw)?;

        let match_score = if generated.match_score.is_finite() {
            generated.match_score.round().clamp(0.0, 100.0) as u8
        } else {
            0
        };

        Ok(AnalysisResponse {
            result: AnalysisResult {
                match_score,
                strengths: generated.strengths,
                weaknesses: generated.weaknesses,
                missing_skills: generated.missing_skills,
                suggestions: generated.suggestions,
                keyword_match: generated.keyword_match,
                // Signals always come from the local extractors
                signals: self.analyzer.signals(resume),
            },
            ai_powered: true,
            tone_analysis: generated.tone_analysis,
            ats_compatibility: generated.ats_compatibility,
        })
    }
}
