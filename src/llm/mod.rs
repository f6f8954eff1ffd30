//! Generative analysis boundary

pub mod prompts;
pub mod analyzer;

pub use analyzer::{AnalysisResponse, AnalysisService, GenerativeClient, InterviewQuestions, OptimizedBullets};
