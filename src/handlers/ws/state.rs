//! Voice session state
//!
//! One WebSocket connection owns one `SessionState`. The session loop is the
//! only code that touches it, so there is no interior locking; anything the
//! transcription source wants to report crosses into the loop as a
//! `SessionEvent` instead.

use std::sync::Arc;

use crate::core::enrich::EntityEnricher;
use crate::core::interactions::InteractionStore;
use crate::core::stt::{StructuredResult, TranscriptionSource};

/// Per-connection session state
pub struct SessionState {
    /// Every interaction of this session, in first-seen order
    pub store: InteractionStore,
    /// Transcription source consuming this session's audio
    pub source: Box<dyn TranscriptionSource>,
    /// Enrichment step applied before a result is stored
    pub enricher: Arc<dyn EntityEnricher>,
}

impl SessionState {
    pub fn new(source: Box<dyn TranscriptionSource>, enricher: Arc<dyn EntityEnricher>) -> Self {
        Self {
            store: InteractionStore::new(),
            source,
            enricher,
        }
    }
}

/// Events pushed by a transcription source into the session loop
#[derive(Debug)]
pub enum SessionEvent {
    /// The source produced a structured result
    Structured(StructuredResult),
    /// The source's upstream connection ended
    SourceClosed,
}
