//! Request DTOs coming from the widget layer
//!
//! Request DTOs implement `Deserialize` and `Validate` for input validation.

use msgkit_core::UserId;
use serde::Deserialize;
use validator::Validate;

/// Toggle the current user's reaction with one emoji
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToggleReactionRequest {
    /// Unicode emoji or custom emoji shortcode
    #[validate(length(min = 1, max = 64, message = "Emoji must be 1-64 characters"))]
    pub emoji: String,

    pub user_id: UserId,

    #[validate(length(max = 100, message = "User name must be at most 100 characters"))]
    pub user_name: Option<String>,
}

impl ToggleReactionRequest {
    pub fn new(emoji: impl Into<String>, user_id: impl Into<UserId>) -> Self {
        Self {
            emoji: emoji.into(),
            user_id: user_id.into(),
            user_name: None,
        }
    }

    #[must_use]
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }
}
