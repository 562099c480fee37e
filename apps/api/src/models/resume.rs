use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role-specific starter content for the resume builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSuggestions {
    pub summary: String,
    pub skills: Vec<String>,
    pub experience_points: Vec<String>,
}

/// Audit of a resume-builder draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReview {
    pub score: u32,
    pub feedback: Vec<String>,
    pub improved_summary: String,
    /// Polished experience entries, shaped like the builder's input items.
    #[serde(default)]
    pub improved_experience: Vec<Value>,
}
