//! Resume analyzers: pluggable, trait-based strategies producing an `Assessment`.
//!
//! `DelegatedAnalyzer` asks the generative model; `HeuristicAnalyzer` scores
//! keywords locally. `AtsService` owns the selection policy: heuristic when no
//! model client is configured, heuristic with a warning when the model call fails.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::ats::heuristic;
use crate::ats::prompts::{
    ATS_PROMPT_TEMPLATE, ATS_SYSTEM, JOB_CONTEXT_GENERAL, JOB_CONTEXT_WITH_JD,
};
use crate::llm_client::prompts::RAW_JSON_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::assessment::Assessment;

/// Resume text beyond this many characters is not sent to the model.
pub const MAX_RESUME_CHARS: usize = 10_000;

const UPSTREAM_WARNING: &str = "AI limit reached. Using basic keyword analysis.";
const PARSE_WARNING: &str = "AI response could not be parsed. Using basic keyword analysis.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Model call failed: {0}")]
    Upstream(#[source] LlmError),

    #[error("Model response did not match the assessment shape: {0}")]
    Parse(String),
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => AnalysisError::Parse(e.to_string()),
            LlmError::EmptyContent => AnalysisError::Parse(err.to_string()),
            other => AnalysisError::Upstream(other),
        }
    }
}

impl AnalysisError {
    /// The user-facing note attached to the fallback assessment.
    pub fn fallback_warning(&self) -> &'static str {
        match self {
            AnalysisError::Upstream(_) => UPSTREAM_WARNING,
            AnalysisError::Parse(_) => PARSE_WARNING,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The analyzer trait. Implement this to add a backend without touching
/// the endpoint or handler code.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// Short label for logs: "gemini" | "heuristic".
    fn backend(&self) -> &'static str;

    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<Assessment, AnalysisError>;
}

// ────────────────────────────────────────────────────────────────────────────
// DelegatedAnalyzer: generative model
// ────────────────────────────────────────────────────────────────────────────

pub struct DelegatedAnalyzer(pub LlmClient);

#[async_trait]
impl ResumeAnalyzer for DelegatedAnalyzer {
    fn backend(&self) -> &'static str {
        "gemini"
    }

    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<Assessment, AnalysisError> {
        let prompt = build_prompt(resume_text, job_description);
        let assessment = self.0.call_json::<Assessment>(&prompt, ATS_SYSTEM).await?;
        // The model never gets to claim it is a fallback result.
        Ok(Assessment {
            warning: None,
            ..assessment
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAnalyzer: keyword scoring
// ────────────────────────────────────────────────────────────────────────────

pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn assess(&self, resume_text: &str, job_description: Option<&str>) -> Assessment {
        heuristic::assess(resume_text, job_description, &mut rand::thread_rng())
    }
}

#[async_trait]
impl ResumeAnalyzer for HeuristicAnalyzer {
    fn backend(&self) -> &'static str {
        "heuristic"
    }

    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<Assessment, AnalysisError> {
        Ok(self.assess(resume_text, job_description))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection policy
// ────────────────────────────────────────────────────────────────────────────

/// Chooses between the delegated and heuristic analyzers per request.
#[derive(Clone)]
pub struct AtsService {
    delegated: Option<Arc<dyn ResumeAnalyzer>>,
}

impl AtsService {
    /// `llm` is `None` when no API key is configured.
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self {
            delegated: llm.map(|client| Arc::new(DelegatedAnalyzer(client)) as Arc<dyn ResumeAnalyzer>),
        }
    }

    #[cfg(test)]
    pub fn with_delegate(delegate: Arc<dyn ResumeAnalyzer>) -> Self {
        Self {
            delegated: Some(delegate),
        }
    }

    pub fn is_delegated(&self) -> bool {
        self.delegated.is_some()
    }

    /// Always produces an assessment; model failures degrade to the heuristic.
    pub async fn assess(&self, resume_text: &str, job_description: Option<&str>) -> Assessment {
        let job_description = job_description.map(str::trim).filter(|jd| !jd.is_empty());

        let Some(delegated) = &self.delegated else {
            info!("No model API key configured, performing local keyword analysis");
            return HeuristicAnalyzer.assess(resume_text, job_description);
        };

        match delegated.analyze(resume_text, job_description).await {
            Ok(assessment) => assessment,
            Err(e) => {
                warn!(
                    "{} analysis failed, falling back to heuristic: {e}",
                    delegated.backend()
                );
                let mut assessment = HeuristicAnalyzer.assess(resume_text, job_description);
                assessment.warning = Some(e.fallback_warning().to_string());
                assessment
            }
        }
    }
}

fn build_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let job_context = match job_description {
        Some(jd) => JOB_CONTEXT_WITH_JD.replace("{job_description}", jd),
        None => JOB_CONTEXT_GENERAL.to_string(),
    };
    ATS_PROMPT_TEMPLATE
        .replace("{job_context}", &job_context)
        .replace("{raw_json_instruction}", RAW_JSON_INSTRUCTION)
        .replace("{resume_text}", truncate_chars(resume_text, MAX_RESUME_CHARS))
}

/// Truncates on a character boundary.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
