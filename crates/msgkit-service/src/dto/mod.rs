//! Data transfer objects exchanged with the widget layer
//!
//! This module provides:
//! - Request DTOs with validation for widget inputs
//! - Response DTOs for rendering parsed output

pub mod requests;
pub mod responses;

pub use requests::ToggleReactionRequest;
pub use responses::{LinkPreview, MentionCompletion, MentionSegment, SegmentKind};
