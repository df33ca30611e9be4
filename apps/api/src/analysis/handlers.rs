//! Axum route handlers for the analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::interview::{
    evaluate_answer, generate_questions, summarize_interview, AnswerEvaluation, InterviewSummary,
    QuestionSet,
};
use crate::analysis::job_matcher::{match_job, match_role, MatchResult};
use crate::analysis::requests::{
    AnalyzeTextRequest, ClassifyRoleRequest, EvaluateAnswerRequest, GenerateQuestionsRequest,
    InterviewSummaryRequest, InvalidInput, MatchJobDescriptionRequest, MatchJobRequest, MatchTarget,
    ValidMatchJob,
};
use crate::analysis::resume_analyzer::{analyze, ResumeAnalysis};
use crate::analysis::role_classifier::{classify, ClassificationResult};
use crate::document;
use crate::errors::AppError;
use crate::knowledge::KnowledgeBase;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// Résumé analysis plus the role classification of the extracted skills.
#[derive(Debug, Serialize)]
pub struct ResumeReport {
    #[serde(flatten)]
    pub resume: ResumeAnalysis,
    pub classification: ClassificationResult,
}

fn build_report(kb: &KnowledgeBase, text: &str) -> ResumeReport {
    let resume = analyze(kb, text);
    let classification = classify(kb, &resume.extracted_data.skills);
    info!(
        skills = resume.extracted_data.skills.len(),
        score = resume.analysis.score,
        role = %classification.role,
        "Resume analyzed"
    );
    ResumeReport {
        resume,
        classification,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Résumé
// ────────────────────────────────────────────────────────────────────────────

struct Upload {
    filename: String,
    bytes: Bytes,
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;
        return Ok(Upload { filename, bytes });
    }
    Err(InvalidInput::Missing(UPLOAD_FIELD).into())
}

/// Runs extraction off the async runtime. Any extraction failure, including a
/// panic inside the PDF parser, yields empty text.
async fn extract_upload_text(upload: Upload) -> Result<String, AppError> {
    let Upload { filename, bytes } = upload;
    let name = filename.clone();
    let joined =
        tokio::task::spawn_blocking(move || document::extract_text(&name, &bytes)).await;

    match joined {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!(filename = %filename, error = %e, "Resume text extraction failed");
            Ok(String::new())
        }
        Err(e) if e.is_panic() => {
            warn!(filename = %filename, "Resume text extraction panicked");
            Ok(String::new())
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context("Resume extraction task was cancelled")
            .into()),
    }
}

/// POST /ml/parse-resume
///
/// Multipart upload with a `file` part (PDF, DOCX or plain text). Unreadable
/// documents produce the zero-score analysis, not an error.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeReport>, AppError> {
    let upload = read_upload(&mut multipart).await?;
    info!(filename = %upload.filename, bytes = upload.bytes.len(), "Resume upload received");

    let text = extract_upload_text(upload).await?;
    Ok(Json(build_report(&state.knowledge, &text)))
}

/// POST /ml/analyze-text
///
/// Same analysis as parse-resume for text the caller already extracted.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<ResumeReport>, AppError> {
    let text = req.validate()?;
    Ok(Json(build_report(&state.knowledge, &text)))
}

// ────────────────────────────────────────────────────────────────────────────
// Matching & classification
// ────────────────────────────────────────────────────────────────────────────

fn run_match(kb: &KnowledgeBase, valid: ValidMatchJob) -> MatchResult {
    let result = match &valid.target {
        MatchTarget::Role(role) => match_role(kb, &valid.skills, role),
        MatchTarget::Description(text) => match_job(kb, &valid.skills, text),
    };
    info!(
        skills = valid.skills.len(),
        required = result.total_required,
        matching = result.total_matching,
        score = result.match_score,
        "Job match computed"
    );
    result
}

/// POST /ml/match-job
pub async fn handle_match_job(
    State(state): State<AppState>,
    Json(req): Json<MatchJobRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let valid = req.validate()?;
    Ok(Json(run_match(&state.knowledge, valid)))
}

/// POST /ml/match-job-description
pub async fn handle_match_job_description(
    State(state): State<AppState>,
    Json(req): Json<MatchJobDescriptionRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let valid = req.validate()?;
    Ok(Json(run_match(&state.knowledge, valid)))
}

/// POST /ml/classify-role
pub async fn handle_classify_role(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRoleRequest>,
) -> Result<Json<ClassificationResult>, AppError> {
    let skills = req.validate()?;
    let result = classify(&state.knowledge, &skills);
    info!(skills = skills.len(), role = %result.role, confidence = result.confidence, "Role classified");
    Ok(Json(result))
}

// ────────────────────────────────────────────────────────────────────────────
// Interview
// ────────────────────────────────────────────────────────────────────────────

/// POST /ml/generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(req): Json<GenerateQuestionsRequest>,
) -> Result<Json<QuestionSet>, AppError> {
    let valid = req.validate()?;
    let set = {
        let mut rng = rand::thread_rng();
        generate_questions(&state.knowledge, &valid.role, &valid.skills, &mut rng)
    };
    info!(role = %set.role, total = set.total_questions, "Interview questions generated");
    Ok(Json(set))
}

/// POST /ml/evaluate-answer
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(req): Json<EvaluateAnswerRequest>,
) -> Result<Json<AnswerEvaluation>, AppError> {
    let valid = req.validate()?;
    let evaluation = evaluate_answer(&state.knowledge, &valid.question, &valid.answer, &valid.role);
    info!(score = evaluation.score, keywords = evaluation.keywords.len(), "Answer evaluated");
    Ok(Json(evaluation))
}

/// POST /ml/interview-summary
pub async fn handle_interview_summary(
    Json(req): Json<InterviewSummaryRequest>,
) -> Result<Json<InterviewSummary>, AppError> {
    let evaluations = req.validate()?;
    let summary = summarize_interview(&evaluations);
    info!(answered = summary.answered, overall = summary.overall_score, "Interview summarized");
    Ok(Json(summary))
}
