//! Deterministic scoring and feedback core

pub mod tokenizer;
pub mod skills;
pub mod scorer;
pub mod keywords;
pub mod signals;
pub mod feedback;
pub mod analyzer;

pub use analyzer::{AnalysisResult, Analyzer};
