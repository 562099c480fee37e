// Resume builder prompt templates.

pub const SUGGEST_SYSTEM: &str = "\
You are a professional career coach and resume writer. \
You MUST respond with valid JSON only; no markdown fences, no explanations.";

pub const SUGGEST_PROMPT_TEMPLATE: &str = r#"Provide resume content suggestions for the role: "{role}".

Return a strict JSON object with the following structure:
{
  "summary": "A strong, professional summary (2-3 sentences) suitable for a resume for this role.",
  "skills": ["Skill 1", "Skill 2", "Skill 3", "Skill 4", "Skill 5", "Skill 6", "Skill 7", "Skill 8"],
  "experiencePoints": [
    "Action-oriented bullet point example 1 (e.g., 'Optimized X by Y%')",
    "Action-oriented bullet point example 2",
    "Action-oriented bullet point example 3"
  ]
}

{raw_json_instruction}"#;

pub const REVIEW_SYSTEM: &str = "\
You are an expert ATS Resume Auditor. \
You MUST respond with valid JSON only; no markdown fences, no explanations.";

pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Review the following resume data:
{resume_data}

1. Check for spelling/grammar errors.
2. Analyze if the content is ATS-friendly (uses action verbs, keywords).
3. Suggest improvements.

Return a strict JSON object:
{
  "score": 85,
  "feedback": ["Point 1", "Point 2"],
  "improvedSummary": "Polished summary...",
  "improvedExperience": [
    { "id": 1, "role": "...", "company": "...", "description": "Polished description..." }
  ]
}
Map improvedExperience entries to the input experience ids where possible.

{raw_json_instruction}"#;
