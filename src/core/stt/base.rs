use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::core::interactions::Entity;

/// Structured payload emitted by a transcription source
///
/// Carries the recognized utterance plus any entities the provider extracted
/// from it. Sources that only transcribe leave `entities` empty; the
/// enrichment step fills the gap downstream.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StructuredResult {
    /// The transcribed utterance
    pub text: String,
    /// Entities extracted by the provider, possibly empty
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl StructuredResult {
    /// Creates a new StructuredResult
    pub fn new(text: impl Into<String>, entities: Vec<Entity>) -> Self {
        Self {
            text: text.into(),
            entities,
        }
    }
}

/// Configuration for transcription sources
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct STTConfig {
    /// Provider identifier (e.g., "mock")
    pub provider: String,
    /// API key for hosted providers, if required
    pub api_key: Option<String>,
    /// Endpoint override for hosted providers
    pub endpoint: Option<String>,
    /// Language hint for transcription (e.g., "en")
    pub language: String,
    /// Sample rate of the incoming PCM audio in Hz
    pub sample_rate: u32,
}

impl Default for STTConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            api_key: None,
            endpoint: None,
            language: "en".to_string(),
            sample_rate: 16000,
        }
    }
}

/// Error types for transcription source operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum STTError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Audio processing error: {0}")]
    AudioProcessingError(String),
    #[error("Provider error: {0}")]
    ProviderError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Type alias for structured result callbacks
pub type StructuredResultCallback =
    Arc<dyn Fn(StructuredResult) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Type alias for disconnect callbacks
pub type DisconnectCallback =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Contract between a session and its transcription provider
///
/// A source receives raw audio and pushes structured results back through a
/// registered callback. Callbacks must be registered before `connect` so no
/// early result is dropped. `close` must be idempotent: sessions call it once
/// on teardown but a provider may also close itself on upstream failure.
#[async_trait::async_trait]
pub trait TranscriptionSource: Send + Sync {
    /// Create a new instance of the source with the given configuration
    ///
    /// # Arguments
    /// * `config` - Configuration for the source
    ///
    /// # Returns
    /// * `Result<Self, STTError>` - New instance or error
    fn new(config: STTConfig) -> Result<Self, STTError>
    where
        Self: Sized;

    /// Open the connection to the provider
    async fn connect(&mut self) -> Result<(), STTError>;

    /// Close the connection; safe to call more than once
    async fn close(&mut self) -> Result<(), STTError>;

    /// Whether the source is connected and accepting audio
    fn is_ready(&self) -> bool;

    /// Send raw audio bytes to the provider
    ///
    /// Implementations decide what to do with audio received before `connect`;
    /// dropping it silently is acceptable.
    ///
    /// # Arguments
    /// * `audio` - PCM audio bytes to process
    async fn send_audio(&mut self, audio: Vec<u8>) -> Result<(), STTError>;

    /// Register the callback invoked for each structured result
    ///
    /// # Arguments
    /// * `callback` - Callback receiving every structured result
    async fn on_result(&mut self, callback: StructuredResultCallback) -> Result<(), STTError>;

    /// Register the callback invoked when the upstream connection ends
    ///
    /// Fired at most once per connection, on the transition from connected to
    /// closed.
    ///
    /// # Arguments
    /// * `callback` - Callback run on disconnect
    async fn on_disconnect(&mut self, callback: DisconnectCallback) -> Result<(), STTError>;

    /// Short provider identifier for logs
    fn provider_name(&self) -> &'static str;
}
