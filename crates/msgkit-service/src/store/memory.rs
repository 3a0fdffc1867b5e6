//! In-memory reaction store
//!
//! Stands in for the external reaction backend in tests and previews.

use msgkit_core::{DomainError, ReactionEvent, ReactionId, ReactionStore, RepoResult, UserId};
use tracing::debug;
use uuid::Uuid;

/// Reaction events for one message, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryReactionStore {
    events: Vec<ReactionEvent>,
}

impl MemoryReactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing events
    pub fn with_events(events: Vec<ReactionEvent>) -> Self {
        Self { events }
    }

    /// Borrow the stored events
    pub fn events(&self) -> &[ReactionEvent] {
        &self.events
    }
}

impl ReactionStore for MemoryReactionStore {
    fn snapshot(&self) -> RepoResult<Vec<ReactionEvent>> {
        Ok(self.events.clone())
    }

    fn add(&mut self, emoji: &str, user_id: &UserId, user_name: Option<&str>) -> RepoResult<ReactionEvent> {
        if self
            .events
            .iter()
            .any(|e| e.is_emoji(emoji) && e.is_by(user_id))
        {
            return Err(DomainError::ReactionAlreadyExists);
        }

        let mut event = ReactionEvent::new(Uuid::new_v4().to_string(), emoji, user_id.clone());
        event.user_name = user_name.map(String::from);
        self.events.push(event.clone());

        debug!(id = %event.id, emoji, user_id = %user_id, "Stored reaction");
        Ok(event)
    }

    fn remove(&mut self, id: &ReactionId) -> RepoResult<()> {
        let index = self
            .events
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| DomainError::ReactionNotFound(id.clone()))?;
        self.events.remove(index);

        debug!(id = %id, "Removed reaction");
        Ok(())
    }
}
