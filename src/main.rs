//! resume-match: deterministic resume and job description match scoring

use clap::Parser;
use colored::Colorize;
use log::{error, info};
use resume_match::cli::{self, Cli, Commands, ConfigAction};
use resume_match::config::Config;
use resume_match::error::{Result, ResumeMatchError};
use resume_match::input::InputManager;
use resume_match::llm::analyzer::NoClient;
use resume_match::llm::AnalysisService;
use resume_match::output::formatter::{resolve_save_path, save_report_to_file, ReportGenerator};
use resume_match::output::AnalysisReport;
use resume_match::processing::skills::SKILL_TAXONOMY;
use resume_match::processing::Analyzer;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let custom_config = cli.config.is_some();
    if let Err(e) = run_command(cli.command, config, &config_path, custom_config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path, custom_config: bool) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            stdin_type,
            job,
            output,
            save,
            detailed,
        } => run_analysis(&config, resume, &stdin_type, job, output, save, detailed).await?,

        Commands::CoverLetter {
            resume,
            job,
            company,
            save,
        } => {
            let (resume_text, job_text) = read_documents(&config, &resume, &job).await?;
            let letter = generative_service(&config)?
                .generate_cover_letter(&resume_text, &job_text, company.as_deref())
                .await?;

            match save {
                Some(path) => {
                    save_report_to_file(&letter, &path)?;
                    println!("{} Cover letter saved to {}", "✅".green(), path.display());
                }
                None => println!("{}", letter),
            }
        }

        Commands::InterviewQuestions { resume, job, json } => {
            let (resume_text, job_text) = read_documents(&config, &resume, &job).await?;
            let questions = generative_service(&config)?
                .generate_interview_questions(&resume_text, &job_text)
                .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&questions)?);
            } else {
                print_list("Technical", &questions.technical);
                print_list("Behavioral", &questions.behavioral);
                print_list("Role-specific", &questions.role_specific);
            }
        }

        Commands::OptimizeBullets { bullets, job, json } => {
            let (bullet_text, job_text) = read_documents(&config, &bullets, &job).await?;
            let optimized = generative_service(&config)?
                .optimize_bullet_points(&bullet_text, &job_text)
                .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&optimized)?);
            } else {
                print_list("Optimized bullet points", &optimized.optimized);
            }
        }

        Commands::Skills => {
            println!("Skill taxonomy ({} skills)\n", SKILL_TAXONOMY.len());
            for skill in SKILL_TAXONOMY {
                println!("  • {}", skill);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Scoring Weights:");
                println!("  Words: {:.1}%", config.scoring.word_weight * 100.0);
                println!("  Skills: {:.1}%", config.scoring.skill_weight * 100.0);
                println!("\nInput:");
                println!("  Max file size: {} MB", config.input.max_file_size_mb);
                println!("  Caching: {}", config.input.enable_caching);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                if custom_config {
                    Config::default().save_to(config_path)?;
                } else {
                    Config::default().save()?;
                }
                println!("✅ Configuration reset: {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn input_manager(config: &Config) -> InputManager {
    InputManager::new()
        .with_cache(config.input.enable_caching)
        .with_max_file_size(config.max_file_size_bytes())
}

async fn read_documents(config: &Config, first: &Path, job: &Path) -> Result<(String, String)> {
    let mut manager = input_manager(config);
    let first_text = manager.extract_text(first).await?;
    let job_text = manager.extract_text(job).await?;
    Ok((first_text, job_text))
}

/// The binary ships no generative backend, so these commands report the service as unavailable.
fn generative_service(config: &Config) -> Result<AnalysisService<NoClient>> {
    Ok(AnalysisService::rule_based(Analyzer::with_weights(config.scoring_weights())?))
}

fn print_list(title: &str, items: &[String]) {
    println!("\n{}", title.bold());
    for (i, item) in items.iter().enumerate() {
        println!("{}. {}", i + 1, item);
    }
}

async fn run_analysis(
    config: &Config,
    resume: PathBuf,
    stdin_type: &str,
    job: PathBuf,
    output: Option<String>,
    save: Option<PathBuf>,
    detailed: bool,
) -> Result<()> {
    let from_stdin = cli::is_stdin(&resume);
    if !from_stdin {
        cli::validate_file_extension(&resume, cli::RESUME_EXTENSIONS)
            .map_err(|e| ResumeMatchError::InvalidInput(format!("Resume file: {}", e)))?;
    }
    cli::validate_file_extension(&job, cli::JOB_EXTENSIONS)
        .map_err(|e| ResumeMatchError::InvalidInput(format!("Job description file: {}", e)))?;

    let output_format = match output {
        Some(format) => cli::parse_output_format(&format).map_err(ResumeMatchError::InvalidInput)?,
        None => config.output.format.clone(),
    };

    info!("Analyzing {} against {}", resume.display(), job.display());
    let start_time = Instant::now();

    let mut input_manager = input_manager(config);
    let resume_text = if from_stdin {
        let mut bytes = Vec::new();
        tokio::io::stdin().read_to_end(&mut bytes).await?;
        input_manager.extract_bytes(&bytes, stdin_type, "standard input")?
    } else {
        input_manager.extract_text(&resume).await?
    };
    let job_text = input_manager.extract_text(&job).await?;

    let analyzer = Analyzer::with_weights(config.scoring_weights())?;
    let taxonomy_size = analyzer.skill_count();
    let service = AnalysisService::rule_based(analyzer);
    let response = service.analyze(&resume_text, &job_text).await?;

    let processing_time_ms = start_time.elapsed().as_millis() as u64;
    info!(
        "Analysis completed in {}ms with score {}",
        processing_time_ms, response.result.match_score
    );

    let report = AnalysisReport::new(
        response,
        resume.to_string_lossy(),
        job.to_string_lossy(),
        processing_time_ms,
        taxonomy_size,
    );

    // Saved console reports never carry escape codes
    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed || config.output.detailed, true, true);
    let rendered = generator.generate_report(&report, &output_format)?;

    match save {
        Some(save) => {
            let path = resolve_save_path(&save, &output_format, &resume.to_string_lossy());
            save_report_to_file(&rendered, &path)?;
            println!("{} Report saved to {}", "✅".green(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
