//! Request-scoped data model for the coaching pipeline.
//! Nothing here persists between calls.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The four fixed operation modes. Closed set — the dispatcher matches
/// exhaustively, so adding or removing a use case is a compile-time change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseCase {
    ResumeFeedback,
    CareerRoadmap { experience_level: ExperienceLevel },
    MockInterview { focus: InterviewFocus },
    CareerAdvice,
}

/// Self-reported experience level, embedded into the roadmap prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    CareerChange,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::CareerChange => "Career Change",
        }
    }
}

/// Which kinds of questions a mock interview should emphasize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewFocus {
    /// Technical and behavioral mix.
    #[default]
    Mixed,
    Technical,
    Behavioral,
}

impl InterviewFocus {
    pub fn label(&self) -> &'static str {
        match self {
            InterviewFocus::Mixed => "Technical + Behavioral",
            InterviewFocus::Technical => "Technical Only",
            InterviewFocus::Behavioral => "Behavioral Only",
        }
    }
}

/// User-supplied payload for one dispatch. Created on submit, consumed
/// immediately.
#[derive(Debug, Clone)]
pub enum RawInput {
    PlainText(String),
    PdfBytes(Bytes),
}

impl RawInput {
    /// Blank text or an empty byte payload counts as "not present" for the
    /// dispatch guard.
    pub fn is_empty(&self) -> bool {
        match self {
            RawInput::PlainText(s) => s.trim().is_empty(),
            RawInput::PdfBytes(b) => b.is_empty(),
        }
    }
}

/// A fully rendered instruction string bound for the model.
/// Immutable; consumed exactly once by the generation client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub use_case: &'static str,
    pub text: String,
}

/// Outcome of one model call, returned as data so the presentation layer
/// renders failures as visible text instead of crashing the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationResult {
    Success { text: String },
    Failure { message: String },
}
