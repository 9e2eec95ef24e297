// All LLM prompt constants for the coaching module. Four fixed templates,
// one per use case; `{placeholder}` markers are filled by `builder`.

/// Resume feedback prompt. Replace `{resume_text}` before sending.
pub const RESUME_FEEDBACK_TEMPLATE: &str = r#"Analyze the following resume and provide professional feedback.
Focus on:
1. Content quality and relevance
2. Formatting and structure
3. Skills presentation
4. Project descriptions
5. Career path recommendations
6. Areas for improvement

Please provide specific, actionable suggestions.

Resume Content:
{resume_text}"#;

/// Career roadmap prompt. Replace `{goal}` (role plus current level) before sending.
pub const CAREER_ROADMAP_TEMPLATE: &str = r#"Create a detailed learning and career roadmap for someone who wants to become a {goal}.

Please include:
1. Essential skills and technologies to learn
2. Recommended learning sequence (beginner to advanced)
3. Important tools and frameworks
4. Relevant certifications
5. Practice project ideas
6. Timeline estimates
7. Job market insights
8. Salary expectations

Format the response clearly with sections and bullet points where appropriate."#;

/// Mock interview prompt. Replace `{domain}` (domain plus focus) before sending.
/// The question counts are fixed: 5 technical, 2 behavioral, 1 scenario.
pub const MOCK_INTERVIEW_TEMPLATE: &str = r#"Create a mock technical interview simulation for a {domain} role.

Please provide:
1. 5 technical questions (mix of conceptual and practical)
2. 2 behavioral questions
3. 1 scenario-based problem-solving question

For each question, also provide:
- What the interviewer is looking for
- Key points a good answer should cover

Format this as a realistic interview experience."#;

/// Career advice prompt. Replace `{question}` before sending.
pub const CAREER_ADVICE_TEMPLATE: &str = r#"As an experienced career coach, please provide helpful and actionable advice for the following career question:

Question: {question}

Please provide:
1. Direct answer to the question
2. Practical steps to take
3. Additional considerations
4. Resources or next steps to explore"#;
