//! Reaction requests - what a toggle asks the reaction store to do

use serde::{Deserialize, Serialize};

use crate::entities::ReactionEvent;
use crate::value_objects::{ReactionId, UserId};

/// A change the reaction store should apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionRequest {
    Add(AddReaction),
    Remove(RemoveReaction),
}

impl ReactionRequest {
    /// Build an add request
    pub fn add(emoji: impl Into<String>, user_id: UserId, user_name: Option<String>) -> Self {
        Self::Add(AddReaction {
            emoji: emoji.into(),
            user_id,
            user_name,
        })
    }

    /// Build a remove request for an existing event
    pub fn remove(event: &ReactionEvent) -> Self {
        Self::Remove(RemoveReaction {
            id: event.id.clone(),
            emoji: event.emoji.clone(),
            user_id: event.user_id.clone(),
        })
    }

    /// Get the request type name
    pub fn request_type(&self) -> &'static str {
        match self {
            Self::Add(_) => "ADD",
            Self::Remove(_) => "REMOVE",
        }
    }

    /// Emoji the request concerns
    pub fn emoji(&self) -> &str {
        match self {
            Self::Add(r) => &r.emoji,
            Self::Remove(r) => &r.emoji,
        }
    }

    /// User the request concerns
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::Add(r) => &r.user_id,
            Self::Remove(r) => &r.user_id,
        }
    }

    /// Check if this is an add request
    #[inline]
    pub fn is_add(&self) -> bool {
        matches!(self, Self::Add(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReaction {
    pub emoji: String,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Removal is keyed by event id; emoji and user ride along for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveReaction {
    pub id: ReactionId,
    pub emoji: String,
    pub user_id: UserId,
}
