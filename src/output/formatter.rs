//! Output formatters for console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatchError};
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for rendering an analysis report
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badge
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = score_badge(score);

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        if items.is_empty() {
            return;
        }

        output.push_str(&self.format_header(title, 2));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }
}

fn score_badge(score: u8) -> (&'static str, Color) {
    match score {
        90..=100 => ("EXCELLENT", Color::Green),
        80..=89 => ("VERY GOOD", Color::BrightGreen),
        70..=79 => ("GOOD", Color::Yellow),
        60..=69 => ("FAIR", Color::BrightYellow),
        50..=59 => ("BELOW AVG", Color::Red),
        _ => ("POOR", Color::BrightRed),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.response.result;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Match Score: {}% {}\n",
            result.match_score,
            self.format_score_badge(result.match_score)
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(report.verdict(), Color::Cyan)));
        let source = if report.response.ai_powered { "generative model" } else { "rule-based" };
        output.push_str(&format!("Analysis: {}\n", source));

        self.format_list(&mut output, "Strengths", &result.strengths, Color::Green);
        self.format_list(&mut output, "Weaknesses", &result.weaknesses, Color::Yellow);
        self.format_list(&mut output, "Missing Skills", &result.missing_skills, Color::Red);

        if !result.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions", 2));
            for (i, suggestion) in result.suggestions.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, suggestion));
            }
        }

        if let Some(tone) = &report.response.tone_analysis {
            output.push_str(&format!("\n{} {}\n", self.colorize("Tone:", Color::Cyan), tone));
        }
        if let Some(ats) = &report.response.ats_compatibility {
            output.push_str(&format!("{} {}\n", self.colorize("ATS compatibility:", Color::Cyan), ats));
        }

        if self.detailed {
            output.push_str(&self.format_header("Detailed Analysis", 2));

            output.push_str(&self.format_header("Keywords", 3));
            output.push_str(&format!(
                "Matched: {}\n",
                self.colorize(&result.keyword_match.matched.join(", "), Color::Green)
            ));
            output.push_str(&format!(
                "Missing: {}\n",
                self.colorize(&result.keyword_match.missing.join(", "), Color::Red)
            ));

            let signals = &result.signals;
            output.push_str(&self.format_header("Resume Signals", 3));
            output.push_str(&format!("Length: {} characters\n", signals.resume_length));
            output.push_str(&format!("Experience: {} years\n", signals.experience_years));
            output.push_str(&format!("Education mentioned: {}\n", yes_no(signals.education_mentioned)));
            output.push_str(&format!(
                "Quantified achievements: {}\n",
                yes_no(signals.has_quantifiable_metrics)
            ));
        }

        output.push_str(&format!(
            "\n{} resume-match v{} | {} vs {} | {} taxonomy skills\n",
            self.colorize("ℹ", Color::Blue),
            report.metadata.version,
            display_name(&report.metadata.resume_file),
            display_name(&report.metadata.job_file),
            report.metadata.taxonomy_size
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }

    fn push_section(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }

        output.push_str(&format!("## {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }

    fn code_list(items: &[String]) -> String {
        if items.is_empty() {
            "none".to_string()
        } else {
            format!("`{}`", items.join("`, `"))
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.response.result;
        let mut output = String::new();

        output.push_str("# Resume Match Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                display_name(&report.metadata.resume_file),
                display_name(&report.metadata.job_file)
            ));
        }

        output.push_str(&format!(
            "**Match Score:** {}% {}\n\n",
            result.match_score,
            Self::markdown_score_badge(result.match_score)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict()));

        Self::push_section(&mut output, "✅ Strengths", &result.strengths);
        Self::push_section(&mut output, "⚠️ Weaknesses", &result.weaknesses);
        Self::push_section(&mut output, "❌ Missing Skills", &result.missing_skills);

        if !result.suggestions.is_empty() {
            output.push_str("## 📋 Suggestions\n\n");
            for (i, suggestion) in result.suggestions.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, suggestion));
            }
            output.push('\n');
        }

        output.push_str("## 🔍 Keywords\n\n");
        output.push_str(&format!("**Matched:** {}\n\n", Self::code_list(&result.keyword_match.matched)));
        output.push_str(&format!("**Missing:** {}\n\n", Self::code_list(&result.keyword_match.missing)));

        let signals = &result.signals;
        output.push_str("## 📊 Resume Signals\n\n");
        output.push_str("| Signal | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Length | {} characters |\n", signals.resume_length));
        output.push_str(&format!("| Experience | {} years |\n", signals.experience_years));
        output.push_str(&format!("| Education mentioned | {} |\n", yes_no(signals.education_mentioned)));
        output.push_str(&format!(
            "| Quantified achievements | {} |\n\n",
            yes_no(signals.has_quantifiable_metrics)
        ));

        if let Some(tone) = &report.response.tone_analysis {
            output.push_str(&format!("> **Tone:** {}\n\n", tone));
        }
        if let Some(ats) = &report.response.ats_compatibility {
            output.push_str(&format!("> **ATS compatibility:** {}\n\n", ats));
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            let source = if report.response.ai_powered { "generative analysis" } else { "rule-based analysis" };
            output.push_str(&format!(
                "*Generated by resume-match v{} using {}*\n",
                report.metadata.version, source
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content).map_err(|e| {
        ResumeMatchError::OutputFormatting(format!("Failed to write report to {}: {}", file_path.display(), e))
    })
}

/// Where to write a report: `save` itself, or a suggested file name inside it when it is a directory.
pub fn resolve_save_path(save: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, resume_name, true))
    } else {
        save.to_path_buf()
    }
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
    }
}
