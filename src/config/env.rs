use std::env;

use super::ServerConfig;
use crate::core::stt::STTProvider;

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads configuration from environment variables, with sensible defaults.
    /// Also loads from .env file if present using dotenvy.
    ///
    /// # Returns
    /// * `Result<Self, Box<dyn std::error::Error>>` - The loaded configuration or an error
    ///
    /// # Errors
    /// Returns an error if:
    /// - `PORT` or `STT_SAMPLE_RATE` is not a valid number
    /// - `STT_PROVIDER` names a provider this build does not support
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        // Server configuration
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid port number: {e}"))?;

        // Transcription source configuration
        let stt_provider = env::var("STT_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        // Reject unsupported providers at startup rather than at first session
        stt_provider
            .parse::<STTProvider>()
            .map_err(|e| e.to_string())?;

        let stt_api_key = env::var("STT_API_KEY").ok();
        let stt_endpoint = env::var("STT_ENDPOINT").ok();
        let stt_language = env::var("STT_LANGUAGE").unwrap_or_else(|_| "en".to_string());
        let stt_sample_rate = env::var("STT_SAMPLE_RATE")
            .unwrap_or_else(|_| "16000".to_string())
            .parse::<u32>()
            .map_err(|e| format!("Invalid sample rate: {e}"))?;

        Ok(ServerConfig {
            host,
            port,
            stt_provider,
            stt_api_key,
            stt_endpoint,
            stt_language,
            stt_sample_rate,
        })
    }
}
