//! Wire format for the real-time channel.
//!
//! Every frame is a JSON text message `{"event": <name>, "data": <payload>}`.
//! Signal payloads are carried as `RawValue` so they reach the other peer
//! byte-for-byte as the sender wrote them.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;

pub type PeerId = String;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unknown event '{0}'")]
    UnknownEvent(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Client → server
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Envelope {
    event: String,
    data: Option<Box<RawValue>>,
}

/// Offer from the caller, addressed to `user_to_call`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallUserRequest {
    pub user_to_call: PeerId,
    pub signal_data: Box<RawValue>,
    /// Caller id as the client reports it; the sender's connection id when omitted.
    pub from: Option<PeerId>,
    #[serde(default)]
    pub name: String,
}

/// Answer from the callee, addressed back to the caller.
#[derive(Debug, Deserialize)]
pub struct AnswerCallRequest {
    pub to: PeerId,
    pub signal: Box<RawValue>,
}

#[derive(Debug)]
pub enum ClientEvent {
    CallUser(CallUserRequest),
    AnswerCall(AnswerCallRequest),
}

impl ClientEvent {
    pub fn parse(frame: &str) -> Result<Self, ProtocolError> {
        let envelope: Envelope = serde_json::from_str(frame)?;
        let data = envelope.data.as_deref().map(RawValue::get).unwrap_or("null");
        match envelope.event.as_str() {
            "callUser" => Ok(ClientEvent::CallUser(serde_json::from_str(data)?)),
            "answerCall" => Ok(ClientEvent::AnswerCall(serde_json::from_str(data)?)),
            other => Err(ProtocolError::UnknownEvent(other.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Server → client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct IncomingCall {
    pub signal: Box<RawValue>,
    pub from: PeerId,
    pub name: String,
}

/// `callEnded` carries no `data` field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    Me(PeerId),
    CallUser(IncomingCall),
    CallAccepted(Box<RawValue>),
    CallEnded,
}

impl ServerEvent {
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_call_user() {
        let frame = r#"{"event":"callUser","data":{"userToCall":"b","signalData":{"type":"offer"},"from":"a","name":"Ada"}}"#;
        match ClientEvent::parse(frame).unwrap() {
            ClientEvent::CallUser(req) => {
                assert_eq!(req.user_to_call, "b");
                assert_eq!(req.signal_data.get(), r#"{"type":"offer"}"#);
                assert_eq!(req.from.as_deref(), Some("a"));
                assert_eq!(req.name, "Ada");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_parse_answer_call() {
        let frame = r#"{"event":"answerCall","data":{"to":"a","signal":{"type":"answer","sdp":"v=0"}}}"#;
        match ClientEvent::parse(frame).unwrap() {
            ClientEvent::AnswerCall(req) => {
                assert_eq!(req.to, "a");
                assert_eq!(req.signal.get(), r#"{"type":"answer","sdp":"v=0"}"#);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let err = ClientEvent::parse(r#"{"event":"hangUp","data":null}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownEvent(e) if e == "hangUp"));
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let err = ClientEvent::parse(r#"{"event":"answerCall"}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed(_)));
        assert!(ClientEvent::parse("not json").is_err());
    }

    #[test]
    fn test_server_event_frames() {
        assert_eq!(
            ServerEvent::Me("abc".into()).to_frame().unwrap(),
            r#"{"event":"me","data":"abc"}"#
        );
        assert_eq!(
            ServerEvent::CallEnded.to_frame().unwrap(),
            r#"{"event":"callEnded"}"#
        );
        let signal = RawValue::from_string(r#"{"sdp": "x"}"#.to_string()).unwrap();
        assert_eq!(
            ServerEvent::CallAccepted(signal).to_frame().unwrap(),
            r#"{"event":"callAccepted","data":{"sdp": "x"}}"#
        );
    }
}
