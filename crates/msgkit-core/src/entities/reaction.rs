//! Reaction entities - emoji annotations on a message

use serde::{Deserialize, Serialize};

use crate::value_objects::{ReactionId, UserId};

/// A single reaction event as supplied by the reaction store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionEvent {
    pub id: ReactionId,
    pub emoji: String,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl ReactionEvent {
    /// Create a new ReactionEvent
    pub fn new(id: impl Into<ReactionId>, emoji: impl Into<String>, user_id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            emoji: emoji.into(),
            user_id: user_id.into(),
            user_name: None,
        }
    }

    /// Attach the reacting user's display name
    #[must_use]
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }

    /// Check if reaction belongs to a user
    #[inline]
    pub fn is_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// All reactions sharing one emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionGroup {
    pub emoji: String,
    pub reactions: Vec<ReactionEvent>,
}

impl ReactionGroup {
    /// Create an empty group for an emoji
    pub fn new(emoji: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            reactions: Vec::new(),
        }
    }

    /// Number of reactions in the group
    #[inline]
    pub fn count(&self) -> usize {
        self.reactions.len()
    }

    /// Check if a user is a member of this group
    pub fn contains_user(&self, user_id: &UserId) -> bool {
        self.reactions.iter().any(|r| r.is_by(user_id))
    }
}

/// Aggregated reaction count for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: usize,
    pub me: bool,
}

impl ReactionCount {
    /// Create a new ReactionCount
    pub fn new(emoji: impl Into<String>, count: usize, me: bool) -> Self {
        Self {
            emoji: emoji.into(),
            count,
            me,
        }
    }
}
