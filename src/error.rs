//! Error handling for the resume matcher boundary
//!
//! The scoring core never fails; every variant here belongs to input extraction,
//! the generative analysis path, configuration or report output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Unsupported input kind: {0}")]
    UnsupportedInputKind(String),

    #[error("Upstream service unavailable: {0}")]
    UpstreamServiceUnavailable(String),

    #[error("Invalid response from upstream service: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatchError>;

/// Generative clients report failures through anyhow; all of them mean the
/// upstream analysis could not be obtained.
impl From<anyhow::Error> for ResumeMatchError {
    fn from(err: anyhow::Error) -> Self {
        ResumeMatchError::UpstreamServiceUnavailable(err.to_string())
    }
}
