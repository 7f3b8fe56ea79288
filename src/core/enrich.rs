//! Entity enrichment between raw transcription output and the store
//!
//! Sources deliver text plus whatever entities they extracted. Before a result
//! is stored, an enricher gets a chance to add or replace entities (e.g., by
//! calling out to an NLU backend). Enrichment is best-effort: a failing
//! enricher never loses the utterance, the caller falls back to a bare
//! transcript entity instead.

use crate::core::interactions::Entity;

/// Error raised by an enrichment backend
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichError {
    #[error("enrichment failed: {0}")]
    Failed(String),
}

/// Pluggable entity enrichment step
#[async_trait::async_trait]
pub trait EntityEnricher: Send + Sync {
    /// Produces the entities to store for an utterance
    ///
    /// # Arguments
    /// * `text` - The utterance text
    /// * `entities` - Entities already extracted by the source, possibly empty
    async fn enrich(&self, text: &str, entities: Vec<Entity>)
        -> Result<Vec<Entity>, EnrichError>;
}

/// Entities to store when no richer extraction is available
///
/// Empty text yields no entities at all; anything else is wrapped in a single
/// `transcript` entity so the utterance survives verbatim.
pub fn transcript_fallback(text: &str) -> Vec<Entity> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Entity::new("transcript", text)]
    }
}

/// Default enricher: keeps source entities as-is
///
/// When the source extracted nothing, falls back to the transcript entity.
pub struct PassthroughEnricher;

#[async_trait::async_trait]
impl EntityEnricher for PassthroughEnricher {
    async fn enrich(
        &self,
        text: &str,
        entities: Vec<Entity>,
    ) -> Result<Vec<Entity>, EnrichError> {
        if entities.is_empty() {
            Ok(transcript_fallback(text))
        } else {
            Ok(entities)
        }
    }
}
