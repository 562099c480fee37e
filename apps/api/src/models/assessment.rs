use serde::{Deserialize, Deserializer, Serialize};

/// Structured ATS assessment of a resume. Computed per request, never stored.
///
/// Deserialization doubles as the shape check for model output: every list
/// must be present and `score` must be a number in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u32,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub formatting_issues: Vec<String>,
    pub improvement_plan: Vec<String>,
    /// Set only when this assessment replaced a failed model call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Accepts integer or fractional scores, rounding the latter.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !(0.0..=100.0).contains(&raw) {
        return Err(serde::de::Error::custom(format!(
            "score {raw} is outside 0..=100"
        )));
    }
    Ok(raw.round() as u32)
}
