//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ReactionId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reaction not found: {0}")]
    ReactionNotFound(ReactionId),

    #[error("Attachment unavailable: {0}")]
    AttachmentUnavailable(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("Emoji must not be empty")]
    EmptyEmoji,

    #[error("Attachment too large: {size} bytes exceeds {max}")]
    AttachmentTooLarge { size: u64, max: u64 },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    ReactionAlreadyExists,
}

impl DomainError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",
            Self::AttachmentUnavailable(_) => "ATTACHMENT_UNAVAILABLE",

            // Validation
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::UnsupportedScheme(_) => "UNSUPPORTED_SCHEME",
            Self::MissingHost(_) => "MISSING_HOST",
            Self::EmptyEmoji => "EMPTY_EMOJI",
            Self::AttachmentTooLarge { .. } => "ATTACHMENT_TOO_LARGE",

            // Conflict
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReactionNotFound(_) | Self::AttachmentUnavailable(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_)
                | Self::UnsupportedScheme(_)
                | Self::MissingHost(_)
                | Self::EmptyEmoji
                | Self::AttachmentTooLarge { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionAlreadyExists)
    }
}
