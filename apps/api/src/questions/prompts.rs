// All LLM prompt constants for the Questions module.

/// System prompt for question generation — casts the model as an interviewer
/// and enforces JSON-only output.
pub const QUESTION_SYSTEM: &str = "You are a hiring manager conducting a real interview. \
    Your task is to generate interview questions that test whether the candidate \
    truly understands and can defend the experience listed on their resume, \
    in relation to the job description. \
    Rules: \
    Questions must reference the candidate's experience implicitly or explicitly. \
    Avoid generic questions. \
    Prefer follow-up and depth-probing questions. \
    Output must be realistic and role-specific. \
    Return ONLY valid JSON - no markdown, no explanations.";

/// Question generation prompt template.
/// Replace `{job_description}` and `{resume_context}` before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Job description:
{job_description}

Relevant resume sections:
{resume_context}

Generate 5 interview questions that a real interviewer would ask, mixing technical, behavioral, and role-specific questions.

Return ONLY valid JSON (no markdown code blocks, no explanations):
[
  {
    "category": "Technical | Behavioral | Role-Specific",
    "question": "string"
  }
]"#;

/// Builds the user prompt from the job description and the selected chunk
/// texts in selection order.
pub fn compose_question_prompt(job_description: &str, chunk_texts: &[String]) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_context}", &chunk_texts.join("\n\n"))
}
