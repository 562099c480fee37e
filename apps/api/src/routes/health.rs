use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a status object with service version and live feature state.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "campusconnect-api",
        "aiEnabled": state.ats.is_delegated(),
        "connectedPeers": state.signaling.connected_peers()
    }))
}

/// GET /api/status
pub async fn status_handler() -> &'static str {
    "API is working fine"
}
