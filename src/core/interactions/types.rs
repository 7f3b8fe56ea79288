use serde::{Deserialize, Deserializer, Serialize};

/// A named value extracted from an utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name (e.g., "destination")
    pub name: String,
    /// Extracted value (e.g., "New York")
    pub value: String,
    /// Extraction confidence (0.0 to 1.0), if the source reports one
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "clamp_confidence"
    )]
    pub confidence: Option<f32>,
}

impl Entity {
    /// Creates an entity without a confidence score
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            confidence: None,
        }
    }

    /// Attaches a confidence score, clamped to the valid range
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }
}

fn clamp_confidence<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let confidence = Option::<f32>::deserialize(deserializer)?;
    Ok(confidence.map(|c| c.clamp(0.0, 1.0)))
}

/// Lifecycle state of an interaction
///
/// Every interaction starts in `AwaitingConfirmation` the moment a result is
/// stored for it. A positive confirmation moves it to `Confirmed`; a rejection
/// moves it to `Pending` so a fresh result can supersede the rejected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionStatus {
    /// Rejected or not yet resolved; a new result is expected
    Pending,
    /// A result was captured and the client must confirm or reject it
    AwaitingConfirmation,
    /// The client accepted the captured result
    Confirmed,
}

/// One confirmable unit of a voice session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Session-unique identifier
    pub id: String,
    /// Transcribed or client-supplied utterance text
    pub text: String,
    /// Entities attached to the utterance
    pub entities: Vec<Entity>,
    /// Current lifecycle state
    pub status: InteractionStatus,
}
