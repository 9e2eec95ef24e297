//! Axum route handlers for the Coach API.
//!
//! Every coach endpoint answers HTTP 200 with a serialized
//! `GenerationResult` — failure is data the presentation layer renders,
//! not an HTTP error. `AppError` covers malformed requests only.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::coach::dispatcher::{dispatch, download_filename};
use crate::coach::models::{
    ExperienceLevel, GenerationResult, InterviewFocus, RawInput, UseCase,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub target_role: String,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    pub domain: String,
    #[serde(default)]
    pub focus: InterviewFocus,
}

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub question: String,
}

/// Body returned by every coach endpoint. The flattened result carries the
/// `status` tag; `download_filename` is present on success only.
#[derive(Debug, Serialize)]
pub struct CoachResponse {
    #[serde(flatten)]
    pub result: GenerationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_filename: Option<String>,
}

impl CoachResponse {
    fn new(result: GenerationResult, filename: String) -> Self {
        let download_filename =
            matches!(result, GenerationResult::Success { .. }).then_some(filename);
        Self {
            result,
            download_filename,
        }
    }
}

/// POST /api/v1/coach/resume-feedback
///
/// Multipart form: a `resume` file field (PDF bytes) or a `resume_text`
/// text field. Exactly one is required.
pub async fn handle_resume_feedback(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CoachResponse>, AppError> {
    let mut input: Option<RawInput> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read resume upload: {e}"))
                })?;
                input = Some(RawInput::PdfBytes(bytes));
            }
            Some("resume_text") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read resume text: {e}"))
                })?;
                input = Some(RawInput::PlainText(text));
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let input = input.ok_or_else(|| {
        AppError::Validation("Provide a 'resume' PDF upload or a 'resume_text' field".to_string())
    })?;

    let use_case = UseCase::ResumeFeedback;
    let filename = download_filename(&use_case, "");
    let result = dispatch(state.generator.as_ref(), &use_case, input).await;
    Ok(Json(CoachResponse::new(result, filename)))
}

/// POST /api/v1/coach/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<CoachResponse>, AppError> {
    let use_case = UseCase::CareerRoadmap {
        experience_level: request.experience_level,
    };
    let filename = download_filename(&use_case, &request.target_role);
    let result = dispatch(
        state.generator.as_ref(),
        &use_case,
        RawInput::PlainText(request.target_role),
    )
    .await;
    Ok(Json(CoachResponse::new(result, filename)))
}

/// POST /api/v1/coach/interview
pub async fn handle_interview(
    State(state): State<AppState>,
    Json(request): Json<InterviewRequest>,
) -> Result<Json<CoachResponse>, AppError> {
    let use_case = UseCase::MockInterview {
        focus: request.focus,
    };
    let filename = download_filename(&use_case, &request.domain);
    let result = dispatch(
        state.generator.as_ref(),
        &use_case,
        RawInput::PlainText(request.domain),
    )
    .await;
    Ok(Json(CoachResponse::new(result, filename)))
}

/// POST /api/v1/coach/advice
pub async fn handle_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<CoachResponse>, AppError> {
    let use_case = UseCase::CareerAdvice;
    let filename = download_filename(&use_case, "");
    let result = dispatch(
        state.generator.as_ref(),
        &use_case,
        RawInput::PlainText(request.question),
    )
    .await;
    Ok(Json(CoachResponse::new(result, filename)))
}
