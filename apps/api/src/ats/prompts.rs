// ATS analysis prompt templates.
// All prompts for the ats module are defined here.

pub const ATS_SYSTEM: &str = "\
You are an expert ATS (Applicant Tracking System) analyzer. \
You MUST respond with valid JSON only; no markdown fences, no explanations.";

pub const ATS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume text.
{job_context}

Resume Text:
"{resume_text}"

Provide a strict JSON response with the following structure:
{
  "score": number (0-100),
  "summary": "Brief professional summary of the resume content",
  "strengths": ["Point 1", "Point 2", "Point 3"],
  "weaknesses": ["Point 1", "Point 2", "Point 3"],
  "missingKeywords": ["Keyword 1", "Keyword 2", "Keyword 3"],
  "formattingIssues": ["Issue 1", "Issue 2"],
  "improvementPlan": ["Actionable step 1", "Actionable step 2", "Actionable step 3"]
}

{raw_json_instruction}"#;

pub const JOB_CONTEXT_WITH_JD: &str = r#"Compare it against this Job Description: "{job_description}""#;

pub const JOB_CONTEXT_GENERAL: &str = "Analyze it generally for a modern professional role.";
