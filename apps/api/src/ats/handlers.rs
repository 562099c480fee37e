//! Axum route handlers for the ATS API.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::ats::extract::extract_text;
use crate::errors::AppError;
use crate::models::assessment::Assessment;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";
const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: Assessment,
}

/// Fields collected from the multipart upload.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<Bytes>,
    job_description: Option<String>,
}

/// POST /ats/analyze
///
/// Multipart upload: `resume` (PDF) and optional `jobDescription`.
/// Extraction failures are returned to the caller; model failures never are.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_form(multipart?, state.config.max_upload_bytes).await?;

    let document = form
        .resume
        .ok_or_else(|| AppError::Validation("Please upload a resume (PDF)".to_string()))?;

    info!("Processing resume upload ({} bytes)", document.len());
    let resume_text = extract_text(document).await?;

    let analysis = state
        .ats
        .assess(&resume_text, form.job_description.as_deref())
        .await;

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
    }))
}

async fn read_form(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                if field.content_type() != Some(PDF_MIME) {
                    return Err(AppError::Validation(
                        "Only PDF files are allowed!".to_string(),
                    ));
                }
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if bytes.len() > max_upload_bytes {
                    return Err(AppError::PayloadTooLarge(format!(
                        "Resume exceeds the {max_upload_bytes} byte upload limit"
                    )));
                }
                form.resume = Some(bytes);
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                let text = field.text().await.map_err(multipart_error)?;
                form.job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid upload: {}", e.body_text()))
    }
}
