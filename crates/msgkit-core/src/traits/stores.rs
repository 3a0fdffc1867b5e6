//! Store traits (ports) - define the interface to external collaborators
//!
//! The domain layer defines what it needs; callers plug in the backend
//! that owns the data.

use async_trait::async_trait;

use crate::entities::ReactionEvent;
use crate::error::DomainError;
use crate::value_objects::{ReactionId, UserId};

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Store
// ============================================================================

/// Owner of the reaction events for one message.
///
/// Synchronous: the aggregator only ever works on a snapshot.
pub trait ReactionStore {
    /// Current events, in store order
    fn snapshot(&self) -> RepoResult<Vec<ReactionEvent>>;

    /// Record a new reaction and return the stored event
    fn add(&mut self, emoji: &str, user_id: &UserId, user_name: Option<&str>) -> RepoResult<ReactionEvent>;

    /// Remove a reaction by id
    fn remove(&mut self, id: &ReactionId) -> RepoResult<()>;
}

// ============================================================================
// Blob Reader
// ============================================================================

/// Source of raw attachment bytes for inline previews
#[async_trait]
pub trait BlobReader: Send + Sync {
    /// Size of the blob in bytes
    async fn size(&self, location: &str) -> RepoResult<u64>;

    /// Read the whole blob
    async fn read(&self, location: &str) -> RepoResult<Vec<u8>>;
}
