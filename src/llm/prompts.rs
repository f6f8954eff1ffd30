//! Prompts for generative resume analysis and writing aids

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub combined_analysis: String,
    pub cover_letter: String,
    pub interview_questions: String,
    pub bullet_optimization: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            combined_analysis: COMBINED_ANALYSIS_TEMPLATE.to_string(),
            cover_letter: COVER_LETTER_TEMPLATE.to_string(),
            interview_questions: INTERVIEW_QUESTIONS_TEMPLATE.to_string(),
            bullet_optimization: BULLET_OPTIMIZATION_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptParams {
    pub resume_content: String,
    pub job_content: String,
}

/// Company named in a cover letter when the caller gives none.
pub const DEFAULT_COMPANY_NAME: &str = "the company";

impl PromptTemplates {
    pub fn render_combined_analysis(&self, params: &PromptParams) -> String {
        log::debug!(
            "Rendering analysis prompt: resume {} chars, job {} chars",
            params.resume_content.len(),
            params.job_content.len()
        );

        fill_template(
            &self.combined_analysis,
            &[("resume", params.resume_content.as_str()), ("job", params.job_content.as_str())],
        )
    }

    pub fn render_cover_letter(&self, params: &PromptParams, company_name: Option<&str>) -> String {
        let company = company_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_COMPANY_NAME);

        fill_template(
            &self.cover_letter,
            &[
                ("resume", params.resume_content.as_str()),
                ("job", params.job_content.as_str()),
                ("company", company),
            ],
        )
    }

    pub fn render_interview_questions(&self, params: &PromptParams) -> String {
        fill_template(
            &self.interview_questions,
            &[("resume", params.resume_content.as_str()), ("job", params.job_content.as_str())],
        )
    }

    pub fn render_bullet_optimization(&self, bullet_points: &str, job_description: &str) -> String {
        fill_template(
            &self.bullet_optimization,
            &[("bullets", bullet_points), ("job", job_description)],
        )
    }
}

/// Replace `{name}` placeholders in one pass over the template.
///
/// Substituted text is never scanned again, so documents containing `{job}` or
/// similar stay verbatim. Braces that do not name a known placeholder are kept.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let candidate = &rest[open + 1..];

        let substitution = values.iter().find_map(|(name, value)| {
            candidate
                .strip_prefix(name)
                .filter(|after| after.starts_with('}'))
                .map(|_| (name.len() + 2, *value))
        });

        match substitution {
            Some((consumed, value)) => {
                output.push_str(value);
                rest = &rest[open + consumed..];
            }
            None => {
                output.push('{');
                rest = candidate;
            }
        }
    }

    output.push_str(rest);
    output
}

const COMBINED_ANALYSIS_TEMPLATE: &str = r#"You are an experienced career coach and applicant tracking system specialist. Compare the resume with the job description and report how well they match.

RESUME:
{resume}

JOB DESCRIPTION:
{job}

Answer with a single JSON object of this shape:
{
  "matchScore": <integer 0-100>,
  "strengths": [<4-6 specific strengths>],
  "weaknesses": [<3-5 specific weaknesses>],
  "missingSkills": [<5-10 important skills the resume lacks>],
  "suggestions": [<5-8 actionable improvements>],
  "toneAnalysis": "<short assessment of tone and professionalism>",
  "atsCompatibility": "<short assessment of ATS friendliness>",
  "keywordMatch": {
    "matched": [<job keywords present in the resume>],
    "missing": [<important job keywords absent from the resume>]
  }
}

Be specific and honest. Return only the JSON object, without Markdown or commentary."#;

const COVER_LETTER_TEMPLATE: &str = r#"Write a professional, compelling cover letter for this candidate and role.

RESUME:
{resume}

JOB DESCRIPTION:
{job}

COMPANY NAME: {company}

The letter should:
- be 3-4 paragraphs long
- highlight relevant experience from the resume
- show enthusiasm for the role
- address key requirements from the job description
- keep a professional yet personable tone
- open and close strongly

Return plain text, ready to use."#;

const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"Generate the interview questions this candidate is likely to be asked for this role.

RESUME:
{resume}

JOB DESCRIPTION:
{job}

Answer with a single JSON object of this shape:
{
  "technical": [<4-5 technical questions>],
  "behavioral": [<4-5 behavioral questions>],
  "roleSpecific": [<3-4 role-specific questions>]
}

Base the questions on the actual job requirements and the candidate's background. Return only the JSON object, without Markdown or commentary."#;

const BULLET_OPTIMIZATION_TEMPLATE: &str = r#"Rewrite these resume bullet points to be more impactful, ATS-friendly and aligned with the job description.

BULLET POINTS:
{bullets}

JOB DESCRIPTION:
{job}

Each rewritten bullet should:
- start with a strong action verb
- include quantifiable achievements where possible
- use relevant keywords from the job description
- be concise
- follow the STAR method when applicable

Answer with a single JSON object of this shape:
{
  "optimized": [<rewritten bullet points, in the original order>]
}

Return only the JSON object, without Markdown or commentary."#;

#[cfg(test)]
mod tests {
    use super::*;

    fn params(resume: &str, job: &str) -> PromptParams {
        PromptParams {
            resume_content: resume.to_string(),
            job_content: job.to_string(),
        }
    }

    #[test]
    fn test_render_substitutes_both_documents() {
        let prompt = PromptTemplates::default().render_combined_analysis(&params("RESUME BODY", "JOB BODY"));

        assert!(prompt.contains("RESUME:\nRESUME BODY"));
        assert!(prompt.contains("JOB DESCRIPTION:\nJOB BODY"));
        assert!(!prompt.contains("{resume}"));
        assert!(prompt.contains("\"keywordMatch\""));
    }

    #[test]
    fn test_placeholders_inside_documents_stay_verbatim() {
        let prompt = PromptTemplates::default()
            .render_combined_analysis(&params("My resume mentions {job} literally", "SECRET JOB TEXT"));

        let resume_section = prompt
            .split("JOB DESCRIPTION:")
            .next()
            .unwrap();
        assert!(resume_section.contains("My resume mentions {job} literally"));
        assert!(!resume_section.contains("SECRET JOB TEXT"));
        assert_eq!(prompt.matches("SECRET JOB TEXT").count(), 1);

        let prompt = PromptTemplates::default().render_combined_analysis(&params("Rust", "Bring {resume} please"));
        assert!(prompt.contains("JOB DESCRIPTION:\nBring {resume} please"));
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        assert_eq!(fill_template("{a} {b} {", &[("a", "x")]), "x {b} {");
        assert_eq!(fill_template("{{a}}", &[("a", "x")]), "{x}");
        assert_eq!(fill_template("plain", &[("a", "x")]), "plain");
    }

    #[test]
    fn test_cover_letter_company_name() {
        let templates = PromptTemplates::default();

        let named = templates.render_cover_letter(&params("CV", "JD"), Some("Acme Corp"));
        assert!(named.contains("COMPANY NAME: Acme Corp"));

        let unnamed = templates.render_cover_letter(&params("CV", "JD"), Some("  "));
        assert!(unnamed.contains("COMPANY NAME: the company"));
        assert!(!unnamed.contains("{company}"));
    }

    #[test]
    fn test_interview_and_bullet_prompts() {
        let templates = PromptTemplates::default();

        let interview = templates.render_interview_questions(&params("CV", "JD"));
        assert!(interview.contains("\"roleSpecific\""));
        assert!(interview.contains("RESUME:\nCV"));

        let bullets = templates.render_bullet_optimization("- Fixed bugs\n- Wrote docs", "JD");
        assert!(bullets.contains("BULLET POINTS:\n- Fixed bugs\n- Wrote docs"));
        assert!(bullets.contains("\"optimized\""));
    }
}
