//! Interaction result handling
//!
//! Every transcription result funnels through [`handle_structured_result`],
//! whether the client transcribed locally and sent an `stt_result` message or
//! the server-side source produced it from raw audio. Confirmation decisions
//! and state requests are handled here too.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::core::enrich::transcript_fallback;
use crate::core::interactions::Entity;

use super::{messages::ServerMessage, state::SessionState};

/// Confirmation prompt presented to the client for a stored result
pub(crate) fn confirmation_prompt(text: &str) -> String {
    format!("Are you confirming: {text}?")
}

/// Store a transcription result and prompt the client to confirm it
///
/// Resolves the interaction id (minting a fresh one when the caller supplies
/// none), runs entity enrichment, stores the result, and queues the `result`
/// and `prompt_confirmation` messages in that order.
///
/// # Arguments
/// * `state` - Session state owning the store and enricher
/// * `message_tx` - Channel for sending response messages back to the client
/// * `text` - Transcribed utterance
/// * `entities` - Entities extracted so far, possibly empty
/// * `interaction_id` - Existing interaction to update, if any
///
/// # Returns
/// * `bool` - true to continue processing, false to terminate the connection
pub async fn handle_structured_result(
    state: &mut SessionState,
    message_tx: &mpsc::Sender<ServerMessage>,
    text: String,
    entities: Vec<Entity>,
    interaction_id: Option<String>,
) -> bool {
    let id = interaction_id.unwrap_or_else(|| state.store.new_id());

    let entities = match state.enricher.enrich(&text, entities).await {
        Ok(enriched) => enriched,
        Err(e) => {
            // Enrichment is best-effort; keep the utterance as a bare transcript
            warn!("Entity enrichment failed: {}", e);
            transcript_fallback(&text)
        }
    };

    let interaction = state.store.set_result(&id, text, entities);
    debug!("Stored result for interaction {}", id);

    let prompt = confirmation_prompt(&interaction.text);
    if message_tx
        .send(ServerMessage::Result {
            result: interaction,
        })
        .await
        .is_err()
    {
        return false;
    }

    message_tx
        .send(ServerMessage::PromptConfirmation {
            interaction_id: id,
            prompt,
        })
        .await
        .is_ok()
}

/// Apply a confirmation decision to an interaction
///
/// Either decision echoes the updated interaction back as a `result` message;
/// a rejection puts the interaction back to pending and follows up with a
/// `retry` message. Decisions about unknown ids come back as protocol errors
/// instead of tearing the session down.
///
/// # Arguments
/// * `state` - Session state owning the store
/// * `message_tx` - Channel for sending response messages back to the client
/// * `interaction_id` - Target interaction
/// * `confirmed` - The client's decision
///
/// # Returns
/// * `bool` - true to continue processing, false to terminate the connection
pub async fn handle_confirm(
    state: &mut SessionState,
    message_tx: &mpsc::Sender<ServerMessage>,
    interaction_id: String,
    confirmed: bool,
) -> bool {
    match state.store.confirm(&interaction_id, confirmed) {
        Ok(interaction) => {
            debug!(
                "Interaction {} {}",
                interaction_id,
                if confirmed { "confirmed" } else { "rejected" }
            );
            if message_tx
                .send(ServerMessage::Result {
                    result: interaction,
                })
                .await
                .is_err()
            {
                return false;
            }

            if confirmed {
                return true;
            }
            message_tx
                .send(ServerMessage::Retry { interaction_id })
                .await
                .is_ok()
        }
        Err(e) => {
            warn!("Confirmation rejected: {}", e);
            message_tx
                .send(ServerMessage::Error {
                    message: e.to_string(),
                })
                .await
                .is_ok()
        }
    }
}

/// Send the full session state snapshot
pub async fn handle_request_state(
    state: &SessionState,
    message_tx: &mpsc::Sender<ServerMessage>,
) -> bool {
    let results = state.store.summary();
    debug!("Sending state snapshot ({} interactions)", results.len());
    message_tx
        .send(ServerMessage::State { results })
        .await
        .is_ok()
}
