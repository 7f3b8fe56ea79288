pub mod enrich;
pub mod interactions;
pub mod stt;

// Re-export commonly used types for convenience
pub use enrich::{transcript_fallback, EnrichError, EntityEnricher, PassthroughEnricher};

pub use interactions::{Entity, Interaction, InteractionStatus, InteractionStore, StoreError};

pub use stt::{
    create_transcription_source, get_supported_stt_providers, MockStt, STTConfig, STTError,
    STTProvider, StructuredResult, TranscriptionSource,
};
