//! WebSocket endpoint for the signaling relay.

use std::time::{Duration, Instant};

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::signaling::hub::SignalingHub;
use crate::state::AppState;

const PING_INTERVAL: Duration = Duration::from_secs(30);
const PONG_TIMEOUT: Duration = Duration::from_secs(60);

/// Liveness probing for one connection.
#[derive(Debug, Clone, Copy)]
pub struct Keepalive {
    pub ping_interval: Duration,
    /// Connection is dropped once no pong has arrived for this long.
    pub pong_timeout: Duration,
}

impl Default for Keepalive {
    fn default() -> Self {
        Self {
            ping_interval: PING_INTERVAL,
            pong_timeout: PONG_TIMEOUT,
        }
    }
}

/// GET /socket
pub async fn handle_socket(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| run_connection(socket, state.signaling, Keepalive::default()))
}

/// Drives one connection from registration to teardown.
async fn run_connection(socket: WebSocket, hub: SignalingHub, keepalive: Keepalive) {
    let (id, mut events) = hub.register();
    let (mut sender, mut receiver) = socket.split();

    let mut ping_interval = interval(keepalive.ping_interval);
    let mut last_pong = Instant::now();

    loop {
        tokio::select! {
            _ = ping_interval.tick() => {
                if last_pong.elapsed() > keepalive.pong_timeout {
                    warn!(peer = %id, "Signaling peer unresponsive, closing connection");
                    break;
                }
                if sender.send(Message::Ping(Vec::new())).await.is_err() {
                    break;
                }
            }

            event = events.recv() => {
                let Some(event) = event else { break };
                let frame = match event.to_frame() {
                    Ok(frame) => frame,
                    Err(err) => {
                        error!("Failed to serialise signaling event: {}", err);
                        continue;
                    }
                };
                if sender.send(Message::Text(frame)).await.is_err() {
                    break;
                }
            }

            next = receiver.next() => {
                match next {
                    Some(Ok(Message::Text(text))) => {
                        if let Err(err) = hub.dispatch(&id, &text) {
                            debug!(peer = %id, "Ignoring signaling frame: {}", err);
                        }
                    }
                    Some(Ok(Message::Pong(_))) => {
                        last_pong = Instant::now();
                    }
                    Some(Ok(Message::Ping(_))) | Some(Ok(Message::Binary(_))) => {}
                    Some(Ok(Message::Close(_))) | None => {
                        info!(peer = %id, "Signaling socket closed by client");
                        break;
                    }
                    Some(Err(err)) => {
                        error!(peer = %id, "Signaling socket receive error: {}", err);
                        break;
                    }
                }
            }
        }
    }

    hub.teardown(&id);
}
