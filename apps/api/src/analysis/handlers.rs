//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::RawInput;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// Job context attached to a submission.
#[derive(Debug, Default)]
struct JobContext {
    company_name: Option<String>,
    job_title: Option<String>,
    job_description: Option<String>,
}

/// POST /api/v1/analyze
///
/// Scores already-extracted résumé text. Empty text is accepted and scores low.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    let job = JobContext {
        company_name: request.company_name.and_then(non_empty),
        job_title: request.job_title.and_then(non_empty),
        job_description: request.job_description.and_then(non_empty),
    };
    let record = run_analysis(&state, request.resume_text, job).await?;
    Ok(Json(record))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `file` (PDF, required), `companyName`, `jobTitle`,
/// `jobDescription`. The document is converted to text, then scored.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let mut job = JobContext::default();
    let mut document: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "companyName" => job.company_name = non_empty(field.text().await?),
            "jobTitle" => job.job_title = non_empty(field.text().await?),
            "jobDescription" => job.job_description = non_empty(field.text().await?),
            "file" => document = Some(field.bytes().await?.to_vec()),
            _ => {}
        }
    }

    let document = document.ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    if document.is_empty() {
        return Err(AppError::Validation("file cannot be empty".to_string()));
    }

    let text = state.extractor.extract(document).await?;
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the uploaded document".to_string(),
        ));
    }

    let record = run_analysis(&state, text, job).await?;
    Ok(Json(record))
}

/// Scores on the blocking pool and wraps the report in a record.
async fn run_analysis(
    state: &AppState,
    resume_text: String,
    job: JobContext,
) -> Result<ResumeRecord, AppError> {
    let analyzer = state.analyzer.clone();
    let job_title = job.job_title.clone();
    let job_description = job.job_description.clone();

    let feedback = tokio::task::spawn_blocking(move || {
        analyzer.report(&RawInput::new(
            &resume_text,
            job_title.as_deref(),
            job_description.as_deref(),
        ))
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    let record = ResumeRecord {
        id: Uuid::new_v4(),
        company_name: job.company_name,
        job_title: job.job_title,
        job_description: job.job_description,
        analyzed_at: Utc::now(),
        feedback,
    };

    info!(
        record_id = %record.id,
        overall_score = record.feedback.overall_score,
        "Resume analyzed"
    );
    Ok(record)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
