//! Response DTOs handed to the rendering layer
//!
//! All response DTOs implement `Serialize`; field names follow the
//! camelCase convention of the widget layer.

use msgkit_core::{MentionUser, UserId};
use serde::Serialize;

// ============================================================================
// Mention Responses
// ============================================================================

/// Segment tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Text,
    Mention,
}

/// One piece of parsed message text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionSegment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    pub content: String,
    /// Resolved roster id; `None` renders as a plain unlinked mention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl MentionSegment {
    /// Plain text segment
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Text,
            content: content.into(),
            user_id: None,
        }
    }

    /// Mention segment, resolved or not
    pub fn mention(content: impl Into<String>, user_id: Option<UserId>) -> Self {
        Self {
            kind: SegmentKind::Mention,
            content: content.into(),
            user_id,
        }
    }

    #[inline]
    pub fn is_mention(&self) -> bool {
        self.kind == SegmentKind::Mention
    }

    /// Mention that names a roster entry
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Result of committing a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionCompletion {
    pub user: MentionUser,
    /// Full input text after replacement
    pub text: String,
    /// Cursor position after the inserted mention and trailing space
    pub cursor: usize,
    /// Byte offset where the replaced `@partial` span started
    pub start: usize,
    /// Byte offset where the replaced span ended (exclusive)
    pub end: usize,
}

// ============================================================================
// Link Responses
// ============================================================================

/// Pseudo-preview synthesized from a URL without fetching it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPreview {
    pub url: String,
    pub hostname: String,
    pub title: String,
    pub display_url: String,
    pub favicon_url: String,
}
