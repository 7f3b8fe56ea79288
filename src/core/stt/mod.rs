//! Transcription sources
//!
//! A session owns exactly one [`TranscriptionSource`], selected by name at
//! startup. The only built-in provider is the in-process mock; hosted
//! providers plug in by implementing the trait and extending the factory.

pub mod base;
pub mod mock;

// Re-export public types and traits
pub use base::{
    DisconnectCallback, STTConfig, STTError, StructuredResult, StructuredResultCallback,
    TranscriptionSource,
};

// Re-export the mock implementation
pub use mock::MockStt;

/// Supported transcription providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum STTProvider {
    /// In-process mock that emits canned results
    Mock,
}

impl std::fmt::Display for STTProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            STTProvider::Mock => write!(f, "mock"),
        }
    }
}

impl std::str::FromStr for STTProvider {
    type Err = STTError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(STTProvider::Mock),
            _ => Err(STTError::ConfigurationError(format!(
                "Unsupported STT provider: {s}. Supported providers: {}",
                get_supported_stt_providers().join(", ")
            ))),
        }
    }
}

/// Names accepted by the provider factory
pub fn get_supported_stt_providers() -> Vec<&'static str> {
    vec!["mock"]
}

/// Creates a transcription source from a provider name
///
/// # Arguments
/// * `provider` - Provider name (case-insensitive)
/// * `config` - Configuration passed to the source
///
/// # Returns
/// * `Result<Box<dyn TranscriptionSource>, STTError>` - Boxed source or error
pub fn create_transcription_source(
    provider: &str,
    config: STTConfig,
) -> Result<Box<dyn TranscriptionSource>, STTError> {
    let provider_enum: STTProvider = provider.parse()?;

    match provider_enum {
        STTProvider::Mock => {
            let source = <MockStt as TranscriptionSource>::new(config)?;
            Ok(Box::new(source))
        }
    }
}

#[cfg(test)]
mod factory_tests {
    use super::*;

    #[test]
    fn test_provider_parse_is_case_insensitive() {
        assert_eq!("mock".parse::<STTProvider>().unwrap(), STTProvider::Mock);
        assert_eq!("Mock".parse::<STTProvider>().unwrap(), STTProvider::Mock);
        assert_eq!("MOCK".parse::<STTProvider>().unwrap(), STTProvider::Mock);
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(STTProvider::Mock.to_string(), "mock");
    }

    #[test]
    fn test_unknown_provider_lists_supported() {
        let err = "deepgram".parse::<STTProvider>().unwrap_err();
        let message = err.to_string();

        assert!(message.contains("Unsupported STT provider: deepgram"));
        assert!(message.contains("mock"));
    }

    #[test]
    fn test_factory_builds_mock_source() {
        let source = create_transcription_source("mock", STTConfig::default()).unwrap();

        assert_eq!(source.provider_name(), "mock");
        assert!(!source.is_ready());
    }

    #[test]
    fn test_factory_rejects_invalid_config() {
        let config = STTConfig {
            sample_rate: 0,
            ..STTConfig::default()
        };

        let result = create_transcription_source("mock", config);

        assert!(matches!(result, Err(STTError::ConfigurationError(_))));
    }
}
