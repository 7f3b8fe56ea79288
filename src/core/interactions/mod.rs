//! Interaction lifecycle and session-scoped storage
//!
//! An interaction is one confirmable unit of a voice session: an utterance,
//! the entities extracted from it, and a status that tracks whether the client
//! has accepted it. The store keeps every interaction for the life of the
//! session and reports them in first-seen order.

pub mod store;
pub mod types;

pub use store::{InteractionStore, StoreError};
pub use types::{Entity, Interaction, InteractionStatus};
