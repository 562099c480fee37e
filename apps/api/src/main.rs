mod ats;
mod chat;
mod config;
mod errors;
mod llm_client;
mod models;
mod resume_builder;
mod routes;
mod signaling;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::rate_limit::ChatRateLimiter;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

const LIMITER_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        ai_enabled = config.ai_enabled(),
        "Starting CampusConnect API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Initialize LLM client only when a key is configured
    let llm = match &config.gemini_api_key {
        Some(key) => {
            let client = LlmClient::new(
                key.clone(),
                config.gemini_model.clone(),
                config.gemini_api_base.clone(),
            )?;
            info!("LLM client initialized (model: {})", client.model());
            Some(client)
        }
        None => {
            warn!("GEMINI_API_KEY is not set; AI features will use offline fallbacks");
            None
        }
    };

    let state = AppState::new(config.clone(), llm);
    spawn_limiter_sweeper(state.chat_limiter.clone());

    // Upload size is limited per route in `routes::api_routes`.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.cors_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Reflects any origin when none are configured, otherwise allows only the listed ones.
fn build_cors(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{o}'");
                None
            }
        })
        .collect();

    let allow_origin = if allowed.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            HeaderName::from_static("token"),
        ])
        .allow_credentials(true)
}

/// Periodically drops idle per-client limiter entries.
fn spawn_limiter_sweeper(limiter: Arc<ChatRateLimiter>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(LIMITER_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            limiter.retain_recent();
        }
    });
}
