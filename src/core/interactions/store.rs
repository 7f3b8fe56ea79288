use std::collections::HashMap;

use uuid::Uuid;

use super::types::{Entity, Interaction, InteractionStatus};

/// Error types for interaction store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The referenced interaction was never stored in this session
    #[error("unknown interaction id: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Session-scoped store of interactions
///
/// Owned by a single session loop, so no interior locking. Interactions are
/// never removed during a session; `summary` reports them in the order their
/// ids were first stored.
#[derive(Debug, Default)]
pub struct InteractionStore {
    interactions: HashMap<String, Interaction>,
    order: Vec<String>,
}

impl InteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh id for an interaction that has no client-supplied one
    pub fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Stores a result for `id`, creating the interaction if needed
    ///
    /// Text and entities always replace whatever was stored before, and the
    /// interaction moves to `AwaitingConfirmation` regardless of its previous
    /// state. An id keeps its original position in the summary order across
    /// repeated results.
    pub fn set_result(&mut self, id: &str, text: String, entities: Vec<Entity>) -> Interaction {
        let interaction = Interaction {
            id: id.to_string(),
            text,
            entities,
            status: InteractionStatus::AwaitingConfirmation,
        };
        if self
            .interactions
            .insert(id.to_string(), interaction.clone())
            .is_none()
        {
            self.order.push(id.to_string());
        }
        interaction
    }

    /// Applies a confirmation decision to an existing interaction
    ///
    /// Accepting moves it to `Confirmed`; rejecting moves it back to `Pending`
    /// so the next result can replace it. Unknown ids are an error, never an
    /// implicit insert.
    pub fn confirm(&mut self, id: &str, confirmed: bool) -> Result<Interaction> {
        let interaction = self
            .interactions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        interaction.status = if confirmed {
            InteractionStatus::Confirmed
        } else {
            InteractionStatus::Pending
        };
        Ok(interaction.clone())
    }

    /// All interactions in first-seen order
    pub fn summary(&self) -> Vec<Interaction> {
        self.order
            .iter()
            .filter_map(|id| self.interactions.get(id))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Interaction> {
        self.interactions.get(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_result_creates_awaiting_confirmation() {
        let mut store = InteractionStore::new();
        let id = store.new_id();

        let interaction = store.set_result(
            &id,
            "book a table".to_string(),
            vec![Entity::new("party_size", "4")],
        );

        assert_eq!(interaction.id, id);
        assert_eq!(interaction.status, InteractionStatus::AwaitingConfirmation);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().text, "book a table");
    }

    #[test]
    fn test_confirm_true_marks_confirmed() {
        let mut store = InteractionStore::new();
        store.set_result("a", "hello".to_string(), vec![]);

        let interaction = store.confirm("a", true).unwrap();

        assert_eq!(interaction.status, InteractionStatus::Confirmed);
        assert_eq!(
            store.get("a").unwrap().status,
            InteractionStatus::Confirmed
        );
    }

    #[test]
    fn test_confirm_false_returns_to_pending() {
        let mut store = InteractionStore::new();
        store.set_result("a", "hello".to_string(), vec![]);

        let interaction = store.confirm("a", false).unwrap();

        // A rejection resets to pending, not back to awaiting_confirmation
        assert_eq!(interaction.status, InteractionStatus::Pending);
        assert_eq!(interaction.text, "hello");
    }

    #[test]
    fn test_rejected_interaction_can_be_resolved_again() {
        let mut store = InteractionStore::new();
        store.set_result("a", "first try".to_string(), vec![]);
        store.confirm("a", false).unwrap();

        let retried = store.set_result("a", "second try".to_string(), vec![]);

        assert_eq!(retried.status, InteractionStatus::AwaitingConfirmation);
        assert_eq!(retried.text, "second try");

        let confirmed = store.confirm("a", true).unwrap();
        assert_eq!(confirmed.status, InteractionStatus::Confirmed);
    }

    #[test]
    fn test_set_result_replaces_text_and_entities_wholesale() {
        let mut store = InteractionStore::new();
        store.set_result(
            "a",
            "go to Boston".to_string(),
            vec![Entity::new("destination", "Boston")],
        );

        let updated = store.set_result(
            "a",
            "go to New York".to_string(),
            vec![Entity::new("destination", "New York")],
        );

        assert_eq!(updated.text, "go to New York");
        assert_eq!(updated.entities.len(), 1);
        assert_eq!(updated.entities[0].value, "New York");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_result_on_confirmed_reopens_confirmation() {
        let mut store = InteractionStore::new();
        store.set_result("a", "hello".to_string(), vec![]);
        store.confirm("a", true).unwrap();

        let reopened = store.set_result("a", "hello again".to_string(), vec![]);

        assert_eq!(reopened.status, InteractionStatus::AwaitingConfirmation);
    }

    #[test]
    fn test_confirm_unknown_id_errors_without_insert() {
        let mut store = InteractionStore::new();
        store.set_result("a", "hello".to_string(), vec![]);

        let err = store.confirm("ghost", true).unwrap_err();

        assert_eq!(err, StoreError::NotFound("ghost".to_string()));
        assert_eq!(err.to_string(), "unknown interaction id: ghost");
        assert_eq!(store.len(), 1);
        assert!(store.get("ghost").is_none());
    }

    #[test]
    fn test_summary_preserves_insertion_order() {
        let mut store = InteractionStore::new();
        store.set_result("first", "one".to_string(), vec![]);
        store.set_result("second", "two".to_string(), vec![]);
        store.set_result("third", "three".to_string(), vec![]);

        // Updating an earlier id must not move it to the back
        store.set_result("first", "one again".to_string(), vec![]);
        store.confirm("second", true).unwrap();

        let summary = store.summary();
        let ids: Vec<&str> = summary.iter().map(|i| i.id.as_str()).collect();

        assert_eq!(ids, vec!["first", "second", "third"]);
        assert_eq!(summary[0].text, "one again");
        assert_eq!(summary[1].status, InteractionStatus::Confirmed);
    }

    #[test]
    fn test_generated_ids_summarize_in_creation_order() {
        let mut store = InteractionStore::new();
        let mut ids = Vec::new();

        for text in ["one", "two", "three"] {
            let id = store.new_id();
            store.set_result(&id, text.to_string(), vec![]);
            store.confirm(&id, true).unwrap();
            ids.push(id);
        }

        let summary = store.summary();
        assert_eq!(summary.len(), 3);
        for (interaction, id) in summary.iter().zip(&ids) {
            assert_eq!(&interaction.id, id);
            assert_eq!(interaction.status, InteractionStatus::Confirmed);
        }
        assert_eq!(summary[2].text, "three");
    }

    #[test]
    fn test_empty_store_summary() {
        let store = InteractionStore::new();

        assert!(store.is_empty());
        assert!(store.summary().is_empty());
    }

    #[test]
    fn test_new_id_is_unique_uuid() {
        let store = InteractionStore::new();
        let a = store.new_id();
        let b = store.new_id();

        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
        assert!(Uuid::parse_str(&b).is_ok());
    }

    #[test]
    fn test_set_result_accepts_empty_text() {
        let mut store = InteractionStore::new();

        let interaction = store.set_result("a", String::new(), vec![]);

        assert_eq!(interaction.text, "");
        assert_eq!(interaction.status, InteractionStatus::AwaitingConfirmation);
    }
}
