//! # msgkit-core
//!
//! Domain layer containing entities, value objects, store traits, and reaction requests.
//! This crate has zero dependencies on rendering or I/O backends.

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Attachment, AttachmentKind, AttachmentMetadata, MentionUser, Presence, PresenceStatus,
    ReactionCount, ReactionEvent, ReactionGroup, ReadReceipt, Roster,
};
pub use error::DomainError;
pub use events::{AddReaction, ReactionRequest, RemoveReaction};
pub use traits::{BlobReader, ReactionStore, RepoResult};
pub use value_objects::{MentionPrecedence, PrecedenceParseError, ReactionId, UserId};
