//! Report structures wrapping an analysis with generation metadata

use crate::llm::analyzer::AnalysisResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Analysis response plus everything needed to render it for a reader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub response: AnalysisResponse,

    pub metadata: ReportMetadata,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of resume-match used
    pub version: String,

    /// Resume file analyzed
    pub resume_file: String,

    /// Job description file analyzed
    pub job_file: String,

    /// Time spent extracting and analyzing
    pub processing_time_ms: u64,

    /// Size of the skill taxonomy the score was computed against
    pub taxonomy_size: usize,
}

impl AnalysisReport {
    pub fn new(
        response: AnalysisResponse,
        resume_file: impl Into<String>,
        job_file: impl Into<String>,
        processing_time_ms: u64,
        taxonomy_size: usize,
    ) -> Self {
        Self {
            response,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.into(),
                job_file: job_file.into(),
                processing_time_ms,
                taxonomy_size,
            },
        }
    }

    pub fn match_score(&self) -> u8 {
        self.response.result.match_score
    }

    pub fn verdict(&self) -> &'static str {
        verdict(self.match_score())
    }
}

/// One-line summary for a match score.
pub fn verdict(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent match - strong candidate for this role",
        80..=89 => "Very good match - minor improvements could help",
        70..=79 => "Good match - some targeted improvements recommended",
        60..=69 => "Fair match - several improvements needed",
        50..=59 => "Below average match - significant improvements required",
        _ => "Poor match - major revisions needed",
    }
}
