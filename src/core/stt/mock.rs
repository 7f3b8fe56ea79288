use tracing::debug;

use super::base::{
    DisconnectCallback, STTConfig, STTError, StructuredResult, StructuredResultCallback,
    TranscriptionSource,
};
use crate::core::interactions::Entity;

/// Bytes per PCM sample (16-bit linear)
const BYTES_PER_SAMPLE: usize = 2;

/// Seconds of buffered audio that trigger a canned result
const EMIT_WINDOW_SECS: usize = 2;

/// In-process transcription source for development and tests
///
/// Counts the audio bytes it receives and emits a fixed structured result
/// every time more than two seconds worth of samples have accumulated, then
/// starts counting again. Audio arriving before `connect` is dropped.
pub struct MockStt {
    config: STTConfig,
    connected: bool,
    bytes_buffered: usize,
    emit_threshold: usize,
    result_callback: Option<StructuredResultCallback>,
    disconnect_callback: Option<DisconnectCallback>,
}

impl std::fmt::Debug for MockStt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockStt")
            .field("config", &self.config)
            .field("connected", &self.connected)
            .field("bytes_buffered", &self.bytes_buffered)
            .field("emit_threshold", &self.emit_threshold)
            .field("result_callback", &self.result_callback.is_some())
            .field("disconnect_callback", &self.disconnect_callback.is_some())
            .finish()
    }
}

impl MockStt {
    fn canned_result() -> StructuredResult {
        StructuredResult::new(
            "I want to go to New York",
            vec![Entity::new("destination", "New York")],
        )
    }
}

#[async_trait::async_trait]
impl TranscriptionSource for MockStt {
    fn new(config: STTConfig) -> Result<Self, STTError> {
        if config.sample_rate == 0 {
            return Err(STTError::ConfigurationError(
                "sample_rate must be greater than zero".to_string(),
            ));
        }
        let emit_threshold = config.sample_rate as usize * BYTES_PER_SAMPLE * EMIT_WINDOW_SECS;
        Ok(Self {
            config,
            connected: false,
            bytes_buffered: 0,
            emit_threshold,
            result_callback: None,
            disconnect_callback: None,
        })
    }

    async fn connect(&mut self) -> Result<(), STTError> {
        self.connected = true;
        debug!(
            "Mock transcription source connected (sample_rate: {}, emit_threshold: {} bytes)",
            self.config.sample_rate, self.emit_threshold
        );
        Ok(())
    }

    async fn close(&mut self) -> Result<(), STTError> {
        if !self.connected {
            return Ok(());
        }
        self.connected = false;
        self.bytes_buffered = 0;
        debug!("Mock transcription source closed");
        let callback = self.disconnect_callback.clone();
        if let Some(callback) = callback {
            callback().await;
        }
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.connected
    }

    async fn send_audio(&mut self, audio: Vec<u8>) -> Result<(), STTError> {
        if !self.connected {
            debug!("Dropping {} audio bytes received before connect", audio.len());
            return Ok(());
        }
        self.bytes_buffered += audio.len();
        if self.bytes_buffered > self.emit_threshold {
            self.bytes_buffered = 0;
            let callback = self.result_callback.clone();
            if let Some(callback) = callback {
                callback(Self::canned_result()).await;
            }
        }
        Ok(())
    }

    async fn on_result(&mut self, callback: StructuredResultCallback) -> Result<(), STTError> {
        self.result_callback = Some(callback);
        Ok(())
    }

    async fn on_disconnect(&mut self, callback: DisconnectCallback) -> Result<(), STTError> {
        self.disconnect_callback = Some(callback);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tokio::sync::Mutex;

    use super::*;

    fn collecting_callback() -> (StructuredResultCallback, Arc<Mutex<Vec<StructuredResult>>>) {
        let results: Arc<Mutex<Vec<StructuredResult>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = results.clone();
        let callback: StructuredResultCallback = Arc::new(move |result| {
            let sink = sink.clone();
            Box::pin(async move {
                sink.lock().await.push(result);
            }) as Pin<Box<dyn Future<Output = ()> + Send>>
        });
        (callback, results)
    }

    fn counting_disconnect() -> (DisconnectCallback, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let callback: DisconnectCallback = Arc::new(move || {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }) as Pin<Box<dyn Future<Output = ()> + Send>>
        });
        (callback, count)
    }

    #[tokio::test]
    async fn test_emits_after_two_seconds_of_audio() {
        // 16 kHz * 2 bytes * 2 s = 64000 byte threshold
        let mut source = MockStt::new(STTConfig::default()).unwrap();
        let (callback, results) = collecting_callback();
        source.on_result(callback).await.unwrap();
        source.connect().await.unwrap();

        // Exactly the threshold does not trigger; the counter must exceed it
        source.send_audio(vec![0u8; 64000]).await.unwrap();
        assert!(results.lock().await.is_empty());

        source.send_audio(vec![0u8; 1]).await.unwrap();
        let emitted = results.lock().await;
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].text, "I want to go to New York");
        assert_eq!(emitted[0].entities[0].name, "destination");
        assert_eq!(emitted[0].entities[0].value, "New York");
    }

    #[tokio::test]
    async fn test_counter_resets_after_emission() {
        let mut source = MockStt::new(STTConfig::default()).unwrap();
        let (callback, results) = collecting_callback();
        source.on_result(callback).await.unwrap();
        source.connect().await.unwrap();

        source.send_audio(vec![0u8; 70_000]).await.unwrap();
        assert_eq!(results.lock().await.len(), 1);

        // The counter restarted from zero, so a small frame stays silent
        source.send_audio(vec![0u8; 1000]).await.unwrap();
        assert_eq!(results.lock().await.len(), 1);

        source.send_audio(vec![0u8; 70_000]).await.unwrap();
        assert_eq!(results.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn test_audio_before_connect_is_dropped() {
        let mut source = MockStt::new(STTConfig::default()).unwrap();
        let (callback, results) = collecting_callback();
        source.on_result(callback).await.unwrap();

        // Well past the threshold, but not connected yet
        source.send_audio(vec![0u8; 100_000]).await.unwrap();
        assert!(results.lock().await.is_empty());

        // Dropped audio must not count toward the threshold either
        source.connect().await.unwrap();
        source.send_audio(vec![0u8; 1000]).await.unwrap();
        assert!(results.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_fires_once_per_connection() {
        let mut source = MockStt::new(STTConfig::default()).unwrap();
        let (callback, count) = counting_disconnect();
        source.on_disconnect(callback).await.unwrap();

        // Close before connect is a no-op
        source.close().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);

        source.connect().await.unwrap();
        assert!(source.is_ready());

        source.close().await.unwrap();
        assert!(!source.is_ready());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Repeated close does not fire again
        source.close().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_threshold_scales_with_sample_rate() {
        let config = STTConfig {
            sample_rate: 8000,
            ..STTConfig::default()
        };
        let mut source = MockStt::new(config).unwrap();
        let (callback, results) = collecting_callback();
        source.on_result(callback).await.unwrap();
        source.connect().await.unwrap();

        // 8 kHz threshold is 32000 bytes
        source.send_audio(vec![0u8; 32_001]).await.unwrap();
        assert_eq!(results.lock().await.len(), 1);
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let config = STTConfig {
            sample_rate: 0,
            ..STTConfig::default()
        };

        let err = MockStt::new(config).unwrap_err();

        assert!(matches!(err, STTError::ConfigurationError(_)));
    }
}
