pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::ats::handlers::handle_analyze;
use crate::chat::handlers::handle_chat;
use crate::chat::rate_limit::rate_limit;
use crate::resume_builder::handlers::{handle_review, handle_suggest};
use crate::signaling::handlers::handle_socket;
use crate::state::AppState;

/// Room for multipart boundaries and the job description beside the file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Feature routes, served both at the root and under `/api`.
fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // ATS
        .route(
            "/ats/analyze",
            post(handle_analyze).layer(DefaultBodyLimit::max(
                state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES,
            )),
        )
        // Resume builder
        .route("/resume/suggest", post(handle_suggest))
        .route("/resume/review", post(handle_review))
        // Chat
        .route(
            "/chat",
            post(handle_chat).layer(middleware::from_fn_with_state(state.clone(), rate_limit)),
        )
        // Signaling
        .route("/socket", get(handle_socket))
}

pub fn build_router(state: AppState) -> Router {
    let api = api_routes(&state);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/status", get(health::status_handler))
        .merge(api.clone())
        .nest("/api", api)
        .with_state(state)
}
