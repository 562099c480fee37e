//! Connection registry and relay operations.
//!
//! Each live connection owns an unbounded outbound channel; the registry maps
//! connection ids to those channels. Relay operations are fire-and-forget: a
//! frame for an unknown or closed target is dropped and only logged.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::signaling::protocol::{
    AnswerCallRequest, CallUserRequest, ClientEvent, IncomingCall, PeerId, ProtocolError,
    ServerEvent,
};

/// Outcome of a directed relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// Target unknown or already gone. Nothing is reported to the sender.
    Dropped,
}

struct PeerSession {
    tx: mpsc::UnboundedSender<ServerEvent>,
    connected_at: DateTime<Utc>,
}

/// Process-local signaling registry. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct SignalingHub {
    peers: Arc<DashMap<PeerId, PeerSession>>,
}

impl SignalingHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new connection. The returned receiver yields `me` first.
    pub fn register(&self) -> (PeerId, mpsc::UnboundedReceiver<ServerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = Uuid::new_v4().simple().to_string();

        // Cannot fail: the receiver is still in hand.
        let _ = tx.send(ServerEvent::Me(id.clone()));

        self.peers.insert(
            id.clone(),
            PeerSession {
                tx,
                connected_at: Utc::now(),
            },
        );
        info!(peer = %id, peers = self.peers.len(), "Signaling peer connected");
        (id, rx)
    }

    /// Routes one client frame from `sender`.
    pub fn dispatch(&self, sender: &str, frame: &str) -> Result<Delivery, ProtocolError> {
        match ClientEvent::parse(frame)? {
            ClientEvent::CallUser(req) => Ok(self.place_call(sender, req)),
            ClientEvent::AnswerCall(req) => Ok(self.answer_call(sender, req)),
        }
    }

    /// Forwards an offer to `req.user_to_call` as `callUser`.
    pub fn place_call(&self, sender: &str, req: CallUserRequest) -> Delivery {
        let target = req.user_to_call;
        let event = ServerEvent::CallUser(IncomingCall {
            signal: req.signal_data,
            from: req.from.unwrap_or_else(|| sender.to_string()),
            name: req.name,
        });
        self.deliver(sender, &target, event)
    }

    /// Forwards an answer to `req.to` as `callAccepted`.
    pub fn answer_call(&self, sender: &str, req: AnswerCallRequest) -> Delivery {
        self.deliver(sender, &req.to, ServerEvent::CallAccepted(req.signal))
    }

    /// Removes `id` and notifies every remaining peer once with `callEnded`.
    /// Returns the number of peers notified.
    pub fn teardown(&self, id: &str) -> usize {
        let Some((_, session)) = self.peers.remove(id) else {
            return 0;
        };

        let notified = self
            .peers
            .iter()
            .filter(|peer| peer.tx.send(ServerEvent::CallEnded).is_ok())
            .count();

        let connected_for = Utc::now() - session.connected_at;
        info!(
            peer = %id,
            connected_secs = connected_for.num_seconds(),
            notified,
            "Signaling peer disconnected"
        );
        notified
    }

    pub fn connected_peers(&self) -> usize {
        self.peers.len()
    }

    #[cfg(test)]
    pub fn is_connected(&self, id: &str) -> bool {
        self.peers.contains_key(id)
    }

    fn deliver(&self, sender: &str, target: &str, event: ServerEvent) -> Delivery {
        let sent = self
            .peers
            .get(target)
            .map(|peer| peer.tx.send(event).is_ok())
            .unwrap_or(false);

        if sent {
            debug!(from = %sender, to = %target, "Relayed signaling frame");
            Delivery::Delivered
        } else {
            warn!(from = %sender, to = %target, "Signaling target not connected, frame dropped");
            Delivery::Dropped
        }
    }
}
