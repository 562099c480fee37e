// Call-signaling relay for the video-interview page.
// Forwards WebRTC offer/answer payloads between connected browsers without
// inspecting them. Nothing here is persisted.

pub mod handlers;
pub mod hub;
pub mod protocol;
