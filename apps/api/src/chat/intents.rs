//! Rule-based intent matching for the portal assistant.
//!
//! Intents are checked in order against the lowercased, trimmed message; the
//! first match wins. Unmatched messages go to the model, then to a generic answer.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::chat::prompts::{CHAT_PROMPT_TEMPLATE, CHAT_SYSTEM};
use crate::llm_client::LlmClient;

pub const DEFAULT_ANSWER: &str = "I can help with jobs, applications, resume upload, recruiter \
    dashboard, and notifications. Tell me what you want to do.";

pub const DEFAULT_SUGGESTIONS: &[&str] =
    &["Open All Jobs", "Upload resume", "View applied applications"];

pub struct Intent {
    pattern: Regex,
    pub answer: &'static str,
    pub suggestions: &'static [&'static str],
}

impl Intent {
    fn new(pattern: &str, answer: &'static str, suggestions: &'static [&'static str]) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i){pattern}")).expect("static intent regex"),
            answer,
            suggestions,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

static INTENTS: LazyLock<Vec<Intent>> = LazyLock::new(|| {
    vec![
        Intent::new(
            r"^(hi|hello|hey)\b|assistance|help",
            "Hello! I can help with jobs, applications, resume upload, and recruiter tools.",
            &["Open All Jobs", "Upload resume", "View applied applications"],
        ),
        Intent::new(
            r"\b(yes|yeah|yup|pls|plz|plzz|please)\b",
            "Great. Tell me your area (e.g., Web Dev, Data Science) or open All Jobs and search.",
            &["Open All Jobs", "View applied applications"],
        ),
        Intent::new(
            r"(apply|application|submit)\b.*(job|role)|\bapply\b",
            "Steps to apply: 1) Open All Jobs, 2) Select a job, 3) Click Apply, 4) Ensure your \
             resume is uploaded from Applications.",
            &["Open All Jobs", "Upload resume", "View applied applications"],
        ),
        Intent::new(
            r"(resume|cv)\b|upload.*(resume|cv)",
            "Upload resume from Applications: open Applications and use 'Select resume' then \
             Save. PDF only.",
            &["Upload resume", "View applied applications"],
        ),
        Intent::new(
            r"(applied|applications|status)\b",
            "View applied applications in Applications. Status appears as \
             Pending/Accepted/Rejected per job.",
            &["View applied applications", "Open Applications"],
        ),
        Intent::new(
            r"(want|need)\b.*\b(job|jobs)\b",
            "Open All Jobs and search by keyword (e.g., Web Dev, React) then Apply to matching roles.",
            &["Open All Jobs", "View applied applications"],
        ),
        Intent::new(
            r"(recruiter|post|manage)\b.*(job|jobs)",
            "Recruiters can add and manage jobs from Dashboard: Add Job, Manage Jobs, and view \
             notifications.",
            &["Open Dashboard", "Manage jobs"],
        ),
        Intent::new(
            r"\brec\b",
            "Recruiters use Dashboard to add jobs, manage applicants, and send notifications.",
            &["Open Dashboard", "Manage jobs"],
        ),
        Intent::new(
            r"(notification|alert)\b",
            "Notifications are shown in Dashboard. You can mark them as read and clear them after \
             reviewing.",
            &["Open Dashboard", "View notifications"],
        ),
        Intent::new(
            r"(password|reset|forgot)\b",
            "Use the login page's 'Forgot Password' to reset. If unavailable, contact support via email.",
            &["Open Home", "Contact support"],
        ),
        Intent::new(
            r"(profile|update|photo|name)\b",
            "Update your profile photo and details from your profile page. Ensure image is \
             PNG/JPG/WebP.",
            &["Open Applications", "View applied applications"],
        ),
        Intent::new(
            r"(recommend|suggest|find)\b.*(job|jobs)|react|frontend|backend|developer",
            "Use All Jobs search: enter keywords like 'React' and filter by location/category. \
             Open a job to read details and Apply.",
            &["Open All Jobs", "View applied applications"],
        ),
        Intent::new(
            r"\b(web|software)\b.*\b(dev|engineer|developer)\b",
            "Search All Jobs for Web Developer roles. Filter by location/category and Apply.",
            &["Open All Jobs", "View applied applications"],
        ),
    ]
});

/// First intent matching the normalised message.
pub fn match_intent(message: &str) -> Option<&'static Intent> {
    let text = message.trim().to_lowercase();
    INTENTS.iter().find(|intent| intent.matches(&text))
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub answer: String,
    pub suggestions: Vec<String>,
}

/// Answers a portal question: intent rules, then the model, then a generic answer.
pub async fn respond(llm: Option<&LlmClient>, message: &str) -> ChatReply {
    if let Some(intent) = match_intent(message) {
        return ChatReply {
            answer: intent.answer.to_string(),
            suggestions: to_owned(intent.suggestions),
        };
    }

    let answer = match llm {
        Some(llm) => {
            let prompt = CHAT_PROMPT_TEMPLATE.replace("{message}", message);
            match llm.call_text(&prompt, CHAT_SYSTEM).await {
                Ok(text) if !text.is_empty() => text,
                Ok(_) => DEFAULT_ANSWER.to_string(),
                Err(e) => {
                    warn!("Chat model call failed, using default answer: {e}");
                    DEFAULT_ANSWER.to_string()
                }
            }
        }
        None => DEFAULT_ANSWER.to_string(),
    };

    ChatReply {
        answer,
        suggestions: to_owned(DEFAULT_SUGGESTIONS),
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_for(message: &str) -> Option<&'static str> {
        match_intent(message).map(|i| i.answer)
    }

    #[test]
    fn test_all_intent_patterns_compile() {
        assert_eq!(INTENTS.len(), 13);
    }

    #[test]
    fn test_greeting_matches_first_intent() {
        assert!(answer_for("  Hello there").unwrap().starts_with("Hello!"));
        assert!(answer_for("I need help").unwrap().starts_with("Hello!"));
    }

    #[test]
    fn test_apply_question_gets_steps() {
        assert!(answer_for("How do I apply?").unwrap().starts_with("Steps to apply"));
    }

    #[test]
    fn test_resume_question() {
        assert!(answer_for("where does my CV go")
            .unwrap()
            .starts_with("Upload resume from Applications"));
    }

    #[test]
    fn test_order_decides_between_overlapping_intents() {
        // "please" (affirmation) is checked before "resume".
        assert!(answer_for("resume please").unwrap().starts_with("Great."));
    }

    #[test]
    fn test_recruiter_shorthand() {
        assert!(answer_for("rec tools?").unwrap().starts_with("Recruiters use Dashboard"));
    }

    #[test]
    fn test_web_developer_query() {
        assert!(answer_for("web dev roles")
            .unwrap()
            .starts_with("Search All Jobs for Web Developer"));
    }

    #[test]
    fn test_unrelated_message_has_no_intent() {
        assert!(answer_for("what is the weather like today").is_none());
    }

    #[tokio::test]
    async fn test_unmatched_without_model_gets_default() {
        let reply = respond(None, "what is the weather like today").await;
        assert_eq!(reply.answer, DEFAULT_ANSWER);
        assert_eq!(reply.suggestions, DEFAULT_SUGGESTIONS);
    }

    #[tokio::test]
    async fn test_unmatched_with_failing_model_gets_default() {
        let llm = LlmClient::new(
            "key".to_string(),
            "gemini-2.5-flash".to_string(),
            "http://127.0.0.1:9".to_string(),
        )
        .unwrap();
        let reply = respond(Some(&llm), "tell me about the campus").await;
        assert_eq!(reply.answer, DEFAULT_ANSWER);
    }

    #[tokio::test]
    async fn test_matched_intent_carries_its_suggestions() {
        let reply = respond(None, "forgot my password").await;
        assert_eq!(reply.suggestions, vec!["Open Home", "Contact support"]);
    }
}
