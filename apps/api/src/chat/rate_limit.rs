//! Per-client request quota for the chat endpoint.

use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

pub type ChatRateLimiter = DefaultKeyedRateLimiter<String>;

/// Builds a keyed limiter allowing `per_minute` requests per client key.
pub fn build_limiter(per_minute: u32) -> Arc<ChatRateLimiter> {
    let quota = Quota::per_minute(NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN));
    Arc::new(RateLimiter::keyed(quota))
}

/// Peer address first, then the first `x-forwarded-for` hop.
fn client_key(request: &Request) -> String {
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = client_key(&request);
    if state.chat_limiter.check_key(&key).is_err() {
        warn!(client = %key, "Chat rate limit exceeded");
        return Err(AppError::RateLimited);
    }
    Ok(next.run(request).await)
}
