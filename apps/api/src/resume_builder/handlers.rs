//! Axum route handlers for the resume builder API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, AppJson};
use crate::models::resume::{ResumeReview, ResumeSuggestions};
use crate::resume_builder::builder::{review, suggest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub success: bool,
    pub suggestions: ResumeSuggestions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[serde(default)]
    pub resume_data: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_demo: bool,
    pub review: ResumeReview,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /resume/suggest
pub async fn handle_suggest(
    State(state): State<AppState>,
    AppJson(request): AppJson<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let role = request
        .role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::Validation("Job role is required.".to_string()))?;

    let outcome = suggest(state.llm.as_ref(), role).await;

    Ok(Json(SuggestResponse {
        success: true,
        suggestions: outcome.suggestions,
        warning: outcome.warning,
    }))
}

/// POST /resume/review
pub async fn handle_review(
    State(state): State<AppState>,
    AppJson(request): AppJson<ReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let resume_data = request
        .resume_data
        .filter(|d| !d.is_null())
        .ok_or_else(|| AppError::Validation("Resume data is required.".to_string()))?;

    let outcome = review(state.llm.as_ref(), &resume_data).await;

    Ok(Json(ReviewResponse {
        success: true,
        is_demo: outcome.is_demo,
        review: outcome.review,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::state::AppState;

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let app = build_router(AppState::for_tests());
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_suggest_requires_role() {
        let (status, body) = post_json("/resume/suggest", json!({"role": "  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Job role is required.");
    }

    #[tokio::test]
    async fn test_suggest_offline_returns_camel_case_suggestions() {
        let (status, body) = post_json("/api/resume/suggest", json!({"role": "QA Engineer"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["suggestions"]["experiencePoints"].is_array());
        assert!(body.get("warning").is_none());
    }

    #[tokio::test]
    async fn test_suggest_mistyped_body_is_validation_envelope() {
        let (status, body) = post_json("/resume/suggest", json!({"role": 5})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_review_requires_data() {
        let (status, body) = post_json("/resume/review", json!({"resumeData": null})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Resume data is required.");
    }

    #[tokio::test]
    async fn test_review_offline_is_flagged_demo() {
        let (status, body) =
            post_json("/resume/review", json!({"resumeData": {"skills": ["Python"]}})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isDemo"], true);
        assert_eq!(body["review"]["score"], 75);
        assert!(body["review"]["improvedExperience"].is_array());
    }
}
