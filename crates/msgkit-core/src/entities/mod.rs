//! Domain entities - the annotation data a message carries

mod attachment;
mod presence;
mod reaction;
mod receipt;
mod user;

pub use attachment::{Attachment, AttachmentKind, AttachmentMetadata};
pub use presence::{Presence, PresenceStatus};
pub use reaction::{ReactionCount, ReactionEvent, ReactionGroup};
pub use receipt::ReadReceipt;
pub use user::{MentionUser, Roster};
