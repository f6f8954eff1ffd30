//! CLI interface for resume-match

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];
pub const JOB_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

/// Path argument meaning "read the document from standard input".
pub const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(name = "resume-match")]
#[command(about = "Deterministic resume and job description match scoring")]
#[command(long_about = "Score how well a resume matches a job description using word overlap, a fixed skill taxonomy and resume heuristics, with actionable feedback")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD), or "-" for standard input
        #[arg(short, long)]
        resume: PathBuf,

        /// MIME type of a resume read from standard input
        #[arg(long, default_value = "text/plain")]
        stdin_type: String,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include keyword and signal details
        #[arg(short, long)]
        detailed: bool,
    },

    /// Write a cover letter with the generative service
    CoverLetter {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Company the letter is addressed to
        #[arg(long)]
        company: Option<String>,

        /// Save the letter to a file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Generate likely interview questions with the generative service
    InterviewQuestions {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Rewrite resume bullet points for a job with the generative service
    OptimizeBullets {
        /// File with the bullet points to rewrite (TXT, MD)
        #[arg(short, long)]
        bullets: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// List the skill taxonomy
    Skills,

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
