//! Request Dispatcher — one linear pipeline per user action.
//!
//! Flow: validate input → (ResumeFeedback with a PDF: extract text) →
//!       build prompt → generate → `GenerationResult`.
//!
//! Every failure is converted to `GenerationResult::Failure` here; nothing
//! past this boundary ever sees an `Err`. Nothing is retried.

use bytes::Bytes;
use tracing::{info, warn};

use crate::coach::builder::{
    build_career_advice, build_career_roadmap, build_mock_interview, build_resume_feedback,
};
use crate::coach::models::{GenerationResult, PromptRequest, RawInput, UseCase};
use crate::extract;
use crate::llm_client::TextGenerator;

/// Single entry point for the presentation-facing layer.
pub async fn dispatch(
    generator: &dyn TextGenerator,
    use_case: &UseCase,
    input: RawInput,
) -> GenerationResult {
    // Guard: the presentation layer should not invoke dispatch with blank
    // required fields, but it is reproduced here as defense-in-depth.
    if input.is_empty() {
        return GenerationResult::Failure {
            message: required_input_message(use_case).to_string(),
        };
    }

    // Only the résumé pipeline accepts a PDF; it gains one extra upstream
    // extraction stage. An extraction failure aborts the request before any
    // generator call.
    let text = match (use_case, input) {
        (UseCase::ResumeFeedback, RawInput::PdfBytes(bytes)) => {
            match extract_pdf_text(bytes).await {
                Ok(text) => text,
                Err(message) => return GenerationResult::Failure { message },
            }
        }
        (_, RawInput::PlainText(text)) => text,
        (_, RawInput::PdfBytes(_)) => {
            return GenerationResult::Failure {
                message: "PDF input is only supported for resume feedback".to_string(),
            }
        }
    };

    let prompt = build_prompt(use_case, &text);
    info!(
        "Dispatching {} prompt ({} chars)",
        prompt.use_case,
        prompt.text.len()
    );

    match generator.generate(&prompt.text).await {
        Ok(generated) => GenerationResult::Success { text: generated },
        Err(e) => {
            warn!("{} generation failed: {e}", prompt.use_case);
            GenerationResult::Failure {
                message: format!("{}{e}", failure_prefix(use_case)),
            }
        }
    }
}

/// Suggested filename when the presentation layer offers the result as a
/// plain-text download. `input_label` is the role/domain the user typed.
pub fn download_filename(use_case: &UseCase, input_label: &str) -> String {
    match use_case {
        UseCase::ResumeFeedback => "resume_feedback.txt".to_string(),
        UseCase::CareerRoadmap { .. } => {
            format!("{}_roadmap.txt", input_label.replace(' ', "_"))
        }
        UseCase::MockInterview { .. } => {
            format!("{}_interview_questions.txt", input_label.replace(' ', "_"))
        }
        UseCase::CareerAdvice => "career_advice.txt".to_string(),
    }
}

fn build_prompt(use_case: &UseCase, text: &str) -> PromptRequest {
    match use_case {
        UseCase::ResumeFeedback => build_resume_feedback(text),
        UseCase::CareerRoadmap { experience_level } => {
            build_career_roadmap(text, *experience_level)
        }
        UseCase::MockInterview { focus } => build_mock_interview(text, *focus),
        UseCase::CareerAdvice => build_career_advice(text),
    }
}

fn failure_prefix(use_case: &UseCase) -> &'static str {
    match use_case {
        UseCase::ResumeFeedback => "Error generating feedback: ",
        UseCase::CareerRoadmap { .. } => "Error generating roadmap: ",
        UseCase::MockInterview { .. } => "Error generating interview questions: ",
        UseCase::CareerAdvice => "Error generating advice: ",
    }
}

fn required_input_message(use_case: &UseCase) -> &'static str {
    match use_case {
        UseCase::ResumeFeedback => "A resume is required. Upload a PDF or paste its text.",
        UseCase::CareerRoadmap { .. } => "A target role is required.",
        UseCase::MockInterview { .. } => "A target domain is required.",
        UseCase::CareerAdvice => "A career question is required.",
    }
}

/// Runs the blocking PDF parse off the async runtime.
async fn extract_pdf_text(bytes: Bytes) -> Result<String, String> {
    match tokio::task::spawn_blocking(move || extract::extract_text(&bytes)).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(format!("Error reading PDF: {e}")),
        Err(e) => Err(format!("Error reading PDF: {e}")),
    }
}
