//! WebSocket message processing orchestrator
//!
//! Decodes incoming text frames and routes them to the interaction handlers.
//! Frames that are not JSON at all are dropped without a reply; valid JSON
//! that cannot be honored earns an `error` message naming the problem.

use tokio::sync::mpsc;
use tracing::debug;

use super::{
    messages::{ClientMessage, ServerMessage, CLIENT_MESSAGE_TYPES},
    result_handler::{handle_confirm, handle_request_state, handle_structured_result},
    state::SessionState,
};

/// Decode and dispatch one text frame
///
/// # Arguments
/// * `state` - Session state shared across handlers
/// * `message_tx` - Channel for sending response messages back to the client
/// * `text` - Raw frame payload
///
/// # Returns
/// * `bool` - true to continue processing, false to terminate the connection
#[inline]
pub async fn handle_text_message(
    state: &mut SessionState,
    message_tx: &mpsc::Sender<ServerMessage>,
    text: &str,
) -> bool {
    match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => handle_incoming_message(message, state, message_tx).await,
        Err(decode_err) => handle_undecodable_text(text, decode_err, message_tx).await,
    }
}

/// Route a decoded client message to its handler
///
/// # Arguments
/// * `message` - The parsed incoming message from the WebSocket client
/// * `state` - Session state shared across handlers
/// * `message_tx` - Channel for sending response messages back to the client
///
/// # Returns
/// * `bool` - true to continue processing, false to terminate the connection
pub async fn handle_incoming_message(
    message: ClientMessage,
    state: &mut SessionState,
    message_tx: &mpsc::Sender<ServerMessage>,
) -> bool {
    match message {
        ClientMessage::SttResult {
            text,
            entities,
            interaction_id,
        } => handle_structured_result(state, message_tx, text, entities, interaction_id).await,
        ClientMessage::Confirm {
            interaction_id,
            confirmed,
        } => handle_confirm(state, message_tx, interaction_id, confirmed).await,
        ClientMessage::RequestState => handle_request_state(state, message_tx).await,
    }
}

/// Answer a text frame that did not decode into a client message
///
/// Non-JSON noise is ignored so a stray frame cannot knock over a session.
/// JSON with an unrecognized or missing `type` is rejected as an unknown
/// message; JSON with a known `type` but bad fields gets an error naming the
/// type and the decode failure.
async fn handle_undecodable_text(
    text: &str,
    decode_err: serde_json::Error,
    message_tx: &mpsc::Sender<ServerMessage>,
) -> bool {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => {
            debug!("Ignoring non-JSON text frame ({} bytes)", text.len());
            return true;
        }
    };

    let message = match value.get("type").and_then(|t| t.as_str()) {
        Some(kind) if CLIENT_MESSAGE_TYPES.contains(&kind) => {
            format!("Invalid {kind} message: {decode_err}")
        }
        _ => "Unknown message type".to_string(),
    };

    message_tx
        .send(ServerMessage::Error { message })
        .await
        .is_ok()
}
