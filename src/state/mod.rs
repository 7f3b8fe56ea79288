use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::enrich::{EntityEnricher, PassthroughEnricher};
use crate::core::stt::STTConfig;

/// Application state that can be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    /// Enrichment step applied to every result before it is stored
    pub enricher: Arc<dyn EntityEnricher>,
}

impl AppState {
    pub async fn new(config: ServerConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            enricher: Arc::new(PassthroughEnricher),
        })
    }

    /// Transcription source configuration for a new session
    pub fn stt_config(&self) -> STTConfig {
        STTConfig {
            provider: self.config.stt_provider.clone(),
            api_key: self.config.stt_api_key.clone(),
            endpoint: self.config.stt_endpoint.clone(),
            language: self.config.stt_language.clone(),
            sample_rate: self.config.stt_sample_rate,
        }
    }
}
