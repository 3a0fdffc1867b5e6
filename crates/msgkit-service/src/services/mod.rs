//! Message annotation services
//!
//! Each service borrows a [`ServiceContext`] and is cheap to construct per
//! render pass. The pure functions behind them are re-exported for callers
//! that hold no context.

pub mod attachment;
pub mod context;
pub mod error;
pub mod link;
pub mod mention;
pub mod presence;
pub mod reaction;
pub mod receipt;
pub mod suggestion;

// Re-export all services for convenience
pub use attachment::{format_file_size, read_data_url, AttachmentService, AttachmentView, ImagePreview};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use link::{build_preview, extract_urls, LinkPreviewState, LinkService};
pub use mention::{MentionParser, MentionService};
pub use presence::{presence_label, PresenceService};
pub use reaction::{group_reactions, has_reacted, reaction_counts, toggle_request, ReactionService};
pub use receipt::{summarize_receipts, ReceiptSummary};
pub use suggestion::{KeyOutcome, MentionSuggestions, SuggestionKey, SuggestionService};
