use std::sync::Arc;

use crate::ats::analyzer::AtsService;
use crate::chat::rate_limit::{build_limiter, ChatRateLimiter};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::signaling::hub::SignalingHub;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no model API key is configured; every AI feature then runs offline.
    pub llm: Option<LlmClient>,
    pub ats: AtsService,
    /// Process-local registry of live signaling connections.
    pub signaling: SignalingHub,
    pub chat_limiter: Arc<ChatRateLimiter>,
}

impl AppState {
    pub fn new(config: Config, llm: Option<LlmClient>) -> Self {
        Self {
            ats: AtsService::new(llm.clone()),
            signaling: SignalingHub::new(),
            chat_limiter: build_limiter(config.chat_rate_limit_per_minute),
            llm,
            config,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(Config::default(), None)
    }
}
