//! Axum WebSocket handler
//!
//! This module contains the WebSocket upgrade handler and the session loop
//! that owns all per-connection state from setup to teardown.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::core::stt::{
    create_transcription_source, DisconnectCallback, STTError, StructuredResultCallback,
    TranscriptionSource,
};
use crate::state::AppState;

use super::{
    messages::ServerMessage,
    processor::handle_text_message,
    result_handler::handle_structured_result,
    state::{SessionEvent, SessionState},
};

/// Buffer size for outgoing control messages
const OUTGOING_BUFFER_SIZE: usize = 64;

/// Buffer size for events pushed by the transcription source
///
/// The session loop drains events before it takes the next frame, so this
/// stays nearly empty; the headroom only matters for sources that push from
/// their own tasks.
const EVENT_BUFFER_SIZE: usize = 32;

/// WebSocket voice session handler
/// Upgrades the HTTP connection to a full-duplex voice session
pub async fn ws_voice_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    info!("WebSocket voice session upgrade requested");
    ws.on_upgrade(move |socket| handle_voice_socket(socket, state))
}

/// Handle one WebSocket voice session
/// This function manages the entire session from source setup to teardown
async fn handle_voice_socket(socket: WebSocket, app_state: Arc<AppState>) {
    info!("WebSocket voice session established");

    // Split the socket into sender and receiver
    let (sender, receiver) = socket.split();

    let (message_tx, message_rx) = mpsc::channel::<ServerMessage>(OUTGOING_BUFFER_SIZE);
    let (event_tx, event_rx) = mpsc::channel::<SessionEvent>(EVENT_BUFFER_SIZE);

    // Single writer task keeps outgoing messages in queue order
    let sender_task = tokio::spawn(send_outgoing(message_rx, sender));

    match setup_session_source(&app_state, &event_tx).await {
        Ok(source) => {
            let mut state = SessionState::new(source, app_state.enricher.clone());
            run_session(&mut state, &message_tx, receiver, event_rx).await;

            if let Err(e) = state.source.close().await {
                warn!("Failed to close transcription source: {}", e);
            }
        }
        Err(e) => {
            error!("Failed to set up transcription source: {}", e);
            let _ = message_tx
                .send(ServerMessage::Error {
                    message: format!("Transcription source unavailable: {e}"),
                })
                .await;
        }
    }

    // Closing the channel lets the writer drain queued messages before the
    // socket drops
    drop(message_tx);
    let _ = sender_task.await;

    info!("WebSocket voice session terminated");
}

/// Serialize and write queued messages to the socket
async fn send_outgoing(
    mut message_rx: mpsc::Receiver<ServerMessage>,
    mut sender: SplitSink<WebSocket, Message>,
) {
    while let Some(message) = message_rx.recv().await {
        let json = match serde_json::to_string(&message) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize outgoing message: {}", e);
                continue;
            }
        };

        if let Err(e) = sender.send(Message::Text(json)).await {
            error!("Failed to send WebSocket message: {}", e);
            break;
        }
    }
}

/// Build the transcription source and wire its callbacks into the session
///
/// Callbacks are registered before `connect` so nothing emitted during
/// connection setup is lost.
async fn setup_session_source(
    app_state: &AppState,
    event_tx: &mpsc::Sender<SessionEvent>,
) -> Result<Box<dyn TranscriptionSource>, STTError> {
    let mut source =
        create_transcription_source(&app_state.config.stt_provider, app_state.stt_config())?;

    let result_tx = event_tx.clone();
    let on_result: StructuredResultCallback = Arc::new(move |result| {
        let result_tx = result_tx.clone();
        Box::pin(async move {
            if result_tx
                .send(SessionEvent::Structured(result))
                .await
                .is_err()
            {
                debug!("Session loop gone, dropping structured result");
            }
        })
    });
    source.on_result(on_result).await?;

    let disconnect_tx = event_tx.clone();
    let on_disconnect: DisconnectCallback = Arc::new(move || {
        let disconnect_tx = disconnect_tx.clone();
        Box::pin(async move {
            // try_send: teardown closes the source too, and by then nothing
            // drains this channel anymore
            let _ = disconnect_tx.try_send(SessionEvent::SourceClosed);
        })
    });
    source.on_disconnect(on_disconnect).await?;

    source.connect().await?;
    Ok(source)
}

/// Drive the session loop until the client leaves or the source dies
async fn run_session(
    state: &mut SessionState,
    message_tx: &mpsc::Sender<ServerMessage>,
    mut receiver: SplitStream<WebSocket>,
    mut event_rx: mpsc::Receiver<SessionEvent>,
) {
    if message_tx.send(ServerMessage::Ready).await.is_err() {
        return;
    }
    info!(
        "Voice session ready (provider: {})",
        state.source.provider_name()
    );

    loop {
        tokio::select! {
            biased;

            // Source events win ties so a structured result is stored before
            // the client message that follows it
            event = event_rx.recv() => {
                match event {
                    Some(SessionEvent::Structured(result)) => {
                        let continue_processing = handle_structured_result(
                            state,
                            message_tx,
                            result.text,
                            result.entities,
                            None,
                        )
                        .await;

                        if !continue_processing {
                            break;
                        }
                    }
                    Some(SessionEvent::SourceClosed) | None => {
                        info!("Transcription source closed, terminating session");
                        break;
                    }
                }
            }

            frame = receiver.next() => {
                match frame {
                    Some(Ok(msg)) => {
                        if !process_message(msg, state, message_tx).await {
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    None => {
                        info!("WebSocket connection closed by client");
                        break;
                    }
                }
            }
        }
    }
}

/// Process one incoming WebSocket frame
#[inline(always)]
async fn process_message(
    msg: Message,
    state: &mut SessionState,
    message_tx: &mpsc::Sender<ServerMessage>,
) -> bool {
    match msg {
        Message::Text(text) => {
            debug!("Received text message: {} bytes", text.len());
            handle_text_message(state, message_tx, &text).await
        }
        Message::Binary(data) => {
            debug!("Received binary audio: {} bytes", data.len());

            // Audio failures are logged, never answered; control messages own
            // the error channel to the client
            if let Err(e) = state.source.send_audio(data).await {
                warn!("Failed to forward audio to transcription source: {}", e);
            }
            true
        }
        Message::Ping(_) => {
            // Ping/Pong is handled automatically by axum
            true
        }
        Message::Pong(_) => true,
        Message::Close(_) => {
            info!("WebSocket connection closed by client");
            false
        }
    }
}
