//! # WebSocket Voice Session Module
//!
//! This module provides the WebSocket interface for real-time voice sessions.
//! One connection is one session: binary frames carry raw audio toward the
//! transcription source, JSON text frames carry control messages in both
//! directions, and every recognized utterance becomes an interaction the
//! client must explicitly confirm or reject.
//!
//! ## WebSocket API
//!
//! ### Connection Flow
//! 1. Client connects to the `/ws` endpoint
//! 2. Server sets up the transcription source and replies with `ready`
//! 3. Client streams binary audio and/or sends `stt_result` messages
//! 4. For each stored result the server sends `result` followed by
//!    `prompt_confirmation`
//! 5. Client answers with `confirm`; the server echoes the updated `result`,
//!    and a rejection additionally triggers `retry` so the interaction can
//!    accept a fresh result under the same id
//! 6. `request_state` returns every interaction in first-seen order at any
//!    time
//!
//! ### Message Types
//!
//! **Incoming Messages:**
//! - `{"type": "stt_result", "text": "...", "entities": [...], "interaction_id": "..."}` -
//!   Client-side transcription result; `entities` and `interaction_id` are optional
//! - `{"type": "confirm", "interaction_id": "...", "confirmed": true}` - Confirmation decision
//! - `{"type": "request_state"}` - Ask for the full session snapshot
//! - **Binary messages** - Raw PCM audio for the transcription source
//!
//! **Outgoing Messages:**
//! - `{"type": "ready"}` - Session is set up, audio may flow
//! - `{"type": "result", "result": {"id": "...", "text": "...", "entities": [...], "status": "awaiting_confirmation"}}` - Stored or re-confirmed interaction
//! - `{"type": "prompt_confirmation", "interaction_id": "...", "prompt": "Are you confirming: ...?"}` - Confirmation request
//! - `{"type": "retry", "interaction_id": "..."}` - The interaction was rejected, try again
//! - `{"type": "state", "results": [...]}` - Snapshot of all interactions in first-seen order
//! - `{"type": "error", "message": "..."}` - A client message could not be honored
//!
//! Interaction status is one of `pending`, `awaiting_confirmation`, or
//! `confirmed`. Text frames that are not JSON are ignored; JSON with an
//! unknown `type` is answered with `Unknown message type`.
//!
//! ## Rust Client Example
//!
//! ```rust,no_run
//! use futures::{SinkExt, StreamExt};
//! use serde_json::json;
//! use tokio_tungstenite::{connect_async, tungstenite::Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (ws_stream, _) = connect_async("ws://localhost:8000/ws").await?;
//!     let (mut write, mut read) = ws_stream.split();
//!
//!     // The first message is always `ready`
//!     if let Some(Ok(Message::Text(text))) = read.next().await {
//!         println!("session: {text}");
//!     }
//!
//!     // Stream PCM audio as binary frames...
//!     write.send(Message::Binary(vec![0u8; 3200])).await?;
//!
//!     // ...or hand over a transcription made on the client
//!     let stt_result = json!({
//!         "type": "stt_result",
//!         "text": "I want to go to New York",
//!     });
//!     write.send(Message::Text(stt_result.to_string())).await?;
//!
//!     while let Some(message) = read.next().await {
//!         if let Message::Text(text) = message? {
//!             let parsed: serde_json::Value = serde_json::from_str(&text)?;
//!             match parsed["type"].as_str() {
//!                 Some("result") => {
//!                     println!("stored: {}", parsed["result"]["text"]);
//!                 }
//!                 Some("prompt_confirmation") => {
//!                     let confirm = json!({
//!                         "type": "confirm",
//!                         "interaction_id": parsed["interaction_id"],
//!                         "confirmed": true,
//!                     });
//!                     write.send(Message::Text(confirm.to_string())).await?;
//!                 }
//!                 Some("retry") => {
//!                     println!("rejected, repeat the utterance");
//!                 }
//!                 Some("error") => {
//!                     eprintln!("error: {}", parsed["message"]);
//!                 }
//!                 _ => {}
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All protocol-level failures are sent back to the client as JSON messages
//! with `type: "error"`:
//!
//! - **Unknown message type**: JSON frame whose `type` is not part of the protocol
//! - **Invalid message**: known `type` with missing or mistyped fields
//! - **Unknown interaction id**: confirmation for an id that was never stored
//!
//! Audio forwarding failures are logged server-side only, and malformed
//! non-JSON frames are dropped silently.

pub mod handler;
pub mod messages;
pub mod processor;
pub mod result_handler;
pub mod state;


// Re-export commonly used items
pub use handler::ws_voice_handler;
pub use messages::{ClientMessage, ServerMessage};
pub use state::{SessionEvent, SessionState};
