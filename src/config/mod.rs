//! Configuration module for the voice session server
//!
//! All configuration comes from environment variables, with a `.env` file
//! picked up for local development. Loading is fail-fast: an unparseable
//! value or an unknown transcription provider aborts startup instead of
//! surfacing mid-session.
//!
//! # Example
//! ```rust,no_run
//! use parlance::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

mod env;

/// Server configuration
///
/// Contains everything needed to run the server:
/// - Server settings (host, port)
/// - Transcription source settings (provider, credentials, audio format)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Transcription source settings
    pub stt_provider: String,
    pub stt_api_key: Option<String>,
    pub stt_endpoint: Option<String>,
    pub stt_language: String,
    pub stt_sample_rate: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            stt_provider: "mock".to_string(),
            stt_api_key: None,
            stt_endpoint: None,
            stt_language: "en".to_string(),
            stt_sample_rate: 16000,
        }
    }
}

impl ServerConfig {
    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
