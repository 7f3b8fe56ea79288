//! WebSocket message types
//!
//! Defines the JSON control messages exchanged over a voice session socket.
//! Binary frames are raw audio and never appear here; everything else is a
//! tagged JSON object with a `type` field.

use serde::{Deserialize, Serialize};

use crate::core::interactions::{Entity, Interaction};

/// WebSocket message types for outgoing messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// The session is set up and audio may flow
    #[serde(rename = "ready")]
    Ready,
    /// The interaction record after a stored result or a confirmation decision
    #[serde(rename = "result")]
    Result { result: Interaction },
    /// Asks the client to confirm or reject an interaction
    #[serde(rename = "prompt_confirmation")]
    PromptConfirmation {
        interaction_id: String,
        prompt: String,
    },
    /// The client rejected an interaction; a fresh attempt is expected
    #[serde(rename = "retry")]
    Retry { interaction_id: String },
    /// Snapshot of every interaction in first-seen order
    #[serde(rename = "state")]
    State { results: Vec<Interaction> },
    #[serde(rename = "error")]
    Error { message: String },
}

/// WebSocket message types for incoming messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// A transcription result produced on the client side
    #[serde(rename = "stt_result")]
    SttResult {
        text: String,
        #[serde(default)]
        entities: Vec<Entity>,
        /// Targets an existing interaction when present
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interaction_id: Option<String>,
    },
    /// Confirmation decision for a prompted interaction
    #[serde(rename = "confirm")]
    Confirm {
        interaction_id: String,
        confirmed: bool,
    },
    /// Asks for the full session state
    #[serde(rename = "request_state")]
    RequestState,
}

/// Message type names a client is allowed to send
///
/// Used to tell an invalid known message apart from an unknown one when a
/// frame fails to decode.
pub const CLIENT_MESSAGE_TYPES: [&str; 3] = ["stt_result", "confirm", "request_state"];
