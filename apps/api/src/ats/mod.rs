// Resume Analysis Service (ATS scoring).
// Implements: PDF text extraction, delegated model analysis, heuristic fallback.
// All model calls go through llm_client; no direct Gemini calls here.

pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod heuristic;
pub mod prompts;
