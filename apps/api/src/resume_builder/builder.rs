//! Resume builder assistance: model-backed with canned offline fallbacks.
//!
//! Unlike ATS analysis there is no heuristic to compute here, so a missing
//! key or failed call yields fixed, role-templated content instead.

use serde_json::Value;
use tracing::{info, warn};

use crate::llm_client::prompts::RAW_JSON_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::resume::{ResumeReview, ResumeSuggestions};
use crate::resume_builder::prompts::{
    REVIEW_PROMPT_TEMPLATE, REVIEW_SYSTEM, SUGGEST_PROMPT_TEMPLATE, SUGGEST_SYSTEM,
};

pub const OFFLINE_SUGGESTIONS_WARNING: &str = "AI limit reached. Showing offline suggestions.";
const DEMO_REVIEW_SCORE: u32 = 75;

#[derive(Debug)]
pub struct SuggestOutcome {
    pub suggestions: ResumeSuggestions,
    pub warning: Option<&'static str>,
}

#[derive(Debug)]
pub struct ReviewOutcome {
    pub review: ResumeReview,
    /// True when the review is canned content rather than a model answer.
    pub is_demo: bool,
}

/// Suggests a summary, skills and experience bullets for `role`.
pub async fn suggest(llm: Option<&LlmClient>, role: &str) -> SuggestOutcome {
    let Some(llm) = llm else {
        info!("No model API key configured, returning mock suggestions");
        return SuggestOutcome {
            suggestions: mock_suggestions(role),
            warning: None,
        };
    };

    let prompt = SUGGEST_PROMPT_TEMPLATE
        .replace("{raw_json_instruction}", RAW_JSON_INSTRUCTION)
        .replace("{role}", role);

    match llm.call_json::<ResumeSuggestions>(&prompt, SUGGEST_SYSTEM).await {
        Ok(suggestions) => SuggestOutcome {
            suggestions,
            warning: None,
        },
        Err(e) => {
            warn!("Suggestion generation failed, returning mock suggestions: {e}");
            SuggestOutcome {
                suggestions: mock_suggestions(role),
                warning: Some(OFFLINE_SUGGESTIONS_WARNING),
            }
        }
    }
}

/// Reviews a resume-builder draft.
pub async fn review(llm: Option<&LlmClient>, resume_data: &Value) -> ReviewOutcome {
    let Some(llm) = llm else {
        info!("No model API key configured, returning demo review");
        return ReviewOutcome {
            review: demo_review(resume_data),
            is_demo: true,
        };
    };

    let prompt = REVIEW_PROMPT_TEMPLATE
        .replace("{raw_json_instruction}", RAW_JSON_INSTRUCTION)
        .replace("{resume_data}", &resume_data.to_string());

    match llm.call_json::<ResumeReview>(&prompt, REVIEW_SYSTEM).await {
        Ok(review) => ReviewOutcome {
            review,
            is_demo: false,
        },
        Err(e) => {
            warn!("Resume review failed, returning offline review: {e}");
            ReviewOutcome {
                review: offline_review(resume_data),
                is_demo: true,
            }
        }
    }
}

fn mock_suggestions(role: &str) -> ResumeSuggestions {
    ResumeSuggestions {
        summary: format!(
            "(Mock) A highly motivated {role} with a proven track record of building scalable \
             web applications. Skilled in modern technologies and passionate about solving complex problems."
        ),
        skills: [
            "React.js",
            "Node.js",
            "MongoDB",
            "Express",
            "JavaScript",
            "TypeScript",
            "Git",
            "REST APIs",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        experience_points: vec![
            format!("Developed and maintained key features for a high-traffic {role} platform."),
            "Collaborated with cross-functional teams to deliver projects on time.".to_string(),
            "Optimized application performance, reducing load times by 30%.".to_string(),
        ],
    }
}

/// First listed skill, or a generic stand-in.
fn lead_skill(resume_data: &Value) -> &str {
    resume_data
        .get("skills")
        .and_then(|s| s.get(0))
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("your field")
}

fn demo_review(resume_data: &Value) -> ResumeReview {
    ResumeReview {
        score: DEMO_REVIEW_SCORE,
        feedback: vec![
            "This is a DEMO result because the AI API Key is missing.".to_string(),
            "Please add GEMINI_API_KEY to your backend .env file to get real analysis.".to_string(),
            "Ensure your resume uses active voice and measurable achievements.".to_string(),
        ],
        improved_summary: format!(
            "(Demo) Highly skilled professional with expertise in {}. Proven ability to deliver \
             high-quality results in fast-paced environments. (Add your API Key for real improvements)",
            lead_skill(resume_data)
        ),
        improved_experience: Vec::new(),
    }
}

fn offline_review(resume_data: &Value) -> ResumeReview {
    ResumeReview {
        score: DEMO_REVIEW_SCORE,
        feedback: vec![
            "AI Service is currently busy (Quota Exceeded). This is a placeholder review.".to_string(),
            "Try again later for a real analysis.".to_string(),
            "General tip: Ensure your resume uses active voice.".to_string(),
        ],
        improved_summary: format!(
            "(Offline Mode) Highly skilled professional with expertise in {}. (AI unavailable)",
            lead_skill(resume_data)
        ),
        improved_experience: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unreachable_llm() -> LlmClient {
        LlmClient::new(
            "key".to_string(),
            "gemini-2.5-flash".to_string(),
            "http://127.0.0.1:9".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_suggest_without_key_is_mock_without_warning() {
        let outcome = suggest(None, "Data Engineer").await;
        assert!(outcome.warning.is_none());
        assert!(outcome.suggestions.summary.contains("Data Engineer"));
        assert_eq!(outcome.suggestions.skills.len(), 8);
        assert_eq!(outcome.suggestions.experience_points.len(), 3);
    }

    #[tokio::test]
    async fn test_suggest_failure_sets_warning() {
        let llm = unreachable_llm();
        let outcome = suggest(Some(&llm), "Data Engineer").await;
        assert_eq!(outcome.warning, Some(OFFLINE_SUGGESTIONS_WARNING));
        assert!(outcome.suggestions.experience_points[0].contains("Data Engineer"));
    }

    #[tokio::test]
    async fn test_review_without_key_is_demo() {
        let outcome = review(None, &json!({"fullName": "Ada", "skills": ["Rust", "Go"]})).await;
        assert!(outcome.is_demo);
        assert_eq!(outcome.review.score, 75);
        assert!(outcome.review.improved_summary.contains("expertise in Rust"));
        assert!(outcome.review.feedback[0].contains("DEMO"));
    }

    #[tokio::test]
    async fn test_review_failure_is_offline_demo() {
        let llm = unreachable_llm();
        let outcome = review(Some(&llm), &json!({"skills": []})).await;
        assert!(outcome.is_demo);
        assert!(outcome.review.improved_summary.starts_with("(Offline Mode)"));
        assert!(outcome.review.improved_summary.contains("your field"));
    }

    #[test]
    fn test_lead_skill_ignores_non_strings() {
        assert_eq!(lead_skill(&json!({"skills": [42]})), "your field");
        assert_eq!(lead_skill(&json!({})), "your field");
        assert_eq!(lead_skill(&json!({"skills": ["SQL"]})), "SQL");
    }

    #[test]
    fn test_review_shape_parses_from_model_output() {
        let text = r#"{"score": 85, "feedback": ["Use action verbs"], "improvedSummary": "Polished",
            "improvedExperience": [{"id": 1, "role": "Intern", "company": "Acme", "description": "Built X"}]}"#;
        let parsed: ResumeReview = crate::llm_client::parse_json_response(text).unwrap();
        assert_eq!(parsed.score, 85);
        assert_eq!(parsed.improved_experience[0]["company"], "Acme");
    }
}
