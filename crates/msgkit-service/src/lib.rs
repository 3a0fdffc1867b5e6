//! # msgkit-service
//!
//! Application layer: reaction aggregation, mention parsing and suggestions,
//! link previews, attachment views, presence labels and read receipts.

pub mod dto;
pub mod services;
pub mod store;

pub use dto::*;
pub use services::*;
pub use store::{FsBlobReader, MemoryReactionStore};
