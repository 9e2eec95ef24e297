//! Prompt Builder — pure, deterministic template rendering.
//!
//! One function per use case. Rendering is total for any field values and
//! never fails; rejecting blank required fields is the dispatcher's guard,
//! not an error variant here.

use crate::coach::models::{ExperienceLevel, InterviewFocus, PromptRequest};
use crate::coach::prompts::{
    CAREER_ADVICE_TEMPLATE, CAREER_ROADMAP_TEMPLATE, MOCK_INTERVIEW_TEMPLATE,
    RESUME_FEEDBACK_TEMPLATE,
};

/// Professional feedback on résumé plain text.
pub fn build_resume_feedback(resume_text: &str) -> PromptRequest {
    PromptRequest {
        use_case: "resume_feedback",
        text: RESUME_FEEDBACK_TEMPLATE.replace("{resume_text}", resume_text),
    }
}

/// Learning and career roadmap for a target role at a given experience level.
/// The level rides along in the goal string, matching the UI's
/// `{role} (Current level: {level})` composition.
pub fn build_career_roadmap(target_role: &str, level: ExperienceLevel) -> PromptRequest {
    let goal = format!("{target_role} (Current level: {})", level.label());
    PromptRequest {
        use_case: "career_roadmap",
        text: CAREER_ROADMAP_TEMPLATE.replace("{goal}", &goal),
    }
}

/// Mock interview questions for a target domain with the requested focus.
pub fn build_mock_interview(domain: &str, focus: InterviewFocus) -> PromptRequest {
    let domain_line = format!("{domain} - {} focus", focus.label());
    PromptRequest {
        use_case: "mock_interview",
        text: MOCK_INTERVIEW_TEMPLATE.replace("{domain}", &domain_line),
    }
}

/// Free-form career question.
pub fn build_career_advice(question: &str) -> PromptRequest {
    PromptRequest {
        use_case: "career_advice",
        text: CAREER_ADVICE_TEMPLATE.replace("{question}", question),
    }
}
