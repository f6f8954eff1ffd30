//! Integration tests for resume-match

use resume_match::error::ResumeMatchError;
use resume_match::input::manager::InputManager;
use resume_match::llm::AnalysisService;
use resume_match::output::formatter::ReportGenerator;
use resume_match::output::AnalysisReport;
use resume_match::config::OutputFormat;
use resume_match::processing::Analyzer;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let err = manager.extract_text(path).await.unwrap_err();
    assert!(matches!(err, ResumeMatchError::UnsupportedInputKind(_)));
}

#[tokio::test]
async fn test_image_input_is_rejected() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/scan.png");

    let err = manager.extract_text(path).await.unwrap_err();
    assert!(matches!(err, ResumeMatchError::UnsupportedInputKind(_)));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let err = manager.extract_text(path).await.unwrap_err();
    assert!(matches!(err, ResumeMatchError::InvalidInput(_)));
}

#[tokio::test]
async fn test_whitespace_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.txt");
    std::fs::write(&path, "  \n\t\n").unwrap();

    let err = InputManager::new().extract_text(&path).await.unwrap_err();
    match err {
        ResumeMatchError::InvalidInput(message) => assert!(message.contains("No text could be extracted")),
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_file_size_limit() {
    let mut manager = InputManager::new().with_max_file_size(16);
    let err = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResumeMatchError::InvalidInput(_)));
}

#[tokio::test]
async fn test_end_to_end_analysis() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let service = AnalysisService::rule_based(Analyzer::new().unwrap());
    let response = service.analyze(&resume, &job).await.unwrap();
    let result = &response.result;

    assert!(!response.ai_powered);
    assert_eq!(result.match_score, 61);
    assert_eq!(result.missing_skills, vec!["Docker", "CI/CD", "GraphQL"]);
    assert_eq!(
        result.strengths,
        vec![
            "6+ years of relevant experience",
            "Includes quantifiable achievements and metrics",
            "Modern technology stack experience",
        ]
    );
    assert_eq!(
        result.weaknesses,
        vec![
            "Resume appears too brief, consider adding more detail",
            "Consider adding relevant project examples",
        ]
    );
    assert_eq!(result.suggestions[1], "Highlight experience with: Docker, CI/CD, GraphQL");
    assert_eq!(
        result.keyword_match.missing,
        vec!["frontend", "looking", "design", "deploy", "docker", "graphql", "plus"]
    );
    assert_eq!(result.signals.experience_years, 6);
    assert!(result.signals.education_mentioned);

    let report = AnalysisReport::new(response, "sample_resume.txt", "sample_job.txt", 1, 63);
    let json = ReportGenerator::with_options(false, true, true, true)
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["matchScore"], serde_json::json!(61));
    assert_eq!(value["analysis"]["resumeLength"], serde_json::json!(423));
}

#[tokio::test]
async fn test_uploaded_bytes_match_file_analysis() {
    let mut manager = InputManager::new();
    let from_file = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let bytes = std::fs::read("tests/fixtures/sample_resume.txt").unwrap();
    let from_bytes = manager.extract_bytes(&bytes, "text/plain", "upload").unwrap();
    assert_eq!(from_bytes, from_file);

    let png = std::fs::read("tests/fixtures/scan.png").unwrap();
    let err = manager.extract_bytes(&png, "image/png", "upload").unwrap_err();
    assert!(matches!(err, ResumeMatchError::UnsupportedInputKind(_)));
}

#[tokio::test]
async fn test_writing_aids_without_generative_service() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let service = AnalysisService::rule_based(Analyzer::new().unwrap());
    let err = service.generate_cover_letter(&resume, &job, Some("Acme")).await.unwrap_err();
    assert!(matches!(err, ResumeMatchError::UpstreamServiceUnavailable(_)));
    let err = service.generate_interview_questions(&resume, &job).await.unwrap_err();
    assert!(matches!(err, ResumeMatchError::UpstreamServiceUnavailable(_)));

    // Rule-based analysis keeps working without the service
    assert_eq!(service.analyze(&resume, &job).await.unwrap().result.match_score, 61);
}
