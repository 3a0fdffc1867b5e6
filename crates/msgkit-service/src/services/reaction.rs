//! Reaction service
//!
//! Groups reaction events by emoji and turns a click on an emoji into an
//! add or remove request. Everything is re-derived from the snapshot on
//! every call.

use std::collections::HashMap;

use msgkit_core::{ReactionCount, ReactionEvent, ReactionGroup, ReactionRequest, ReactionStore, UserId};
use tracing::{debug, instrument};
use validator::Validate;

use crate::dto::ToggleReactionRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Group events by emoji.
///
/// Groups come out in first-seen emoji order; events inside a group keep
/// their input order. Empty input gives an empty list.
pub fn group_reactions(events: &[ReactionEvent]) -> Vec<ReactionGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ReactionGroup> = Vec::new();

    for event in events {
        let slot = *index.entry(event.emoji.as_str()).or_insert_with(|| {
            groups.push(ReactionGroup::new(event.emoji.clone()));
            groups.len() - 1
        });
        groups[slot].reactions.push(event.clone());
    }

    groups
}

/// Whether `user_id` has reacted with `emoji`
pub fn has_reacted(events: &[ReactionEvent], emoji: &str, user_id: &UserId) -> bool {
    find_own(events, emoji, user_id).is_some()
}

/// Per-emoji counts with the current user's membership
pub fn reaction_counts(events: &[ReactionEvent], user_id: &UserId) -> Vec<ReactionCount> {
    group_reactions(events)
        .into_iter()
        .map(|g| {
            let me = g.contains_user(user_id);
            ReactionCount::new(g.emoji, g.reactions.len(), me)
        })
        .collect()
}

/// Decide what clicking `emoji` means for `user_id`.
///
/// Remove-by-id when the user already has that reaction, add otherwise.
pub fn toggle_request(
    events: &[ReactionEvent],
    user_id: &UserId,
    user_name: Option<&str>,
    emoji: &str,
) -> ReactionRequest {
    match find_own(events, emoji, user_id) {
        Some(existing) => ReactionRequest::remove(existing),
        None => ReactionRequest::add(emoji, user_id.clone(), user_name.map(String::from)),
    }
}

fn find_own<'e>(events: &'e [ReactionEvent], emoji: &str, user_id: &UserId) -> Option<&'e ReactionEvent> {
    events.iter().find(|e| e.is_emoji(emoji) && e.is_by(user_id))
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Emoji offered in the quick-reaction bar
    pub fn quick_reactions(&self) -> &[String] {
        &self.ctx.config().reactions.quick_reactions
    }

    /// Groups for a snapshot
    pub fn groups(&self, events: &[ReactionEvent]) -> Vec<ReactionGroup> {
        group_reactions(events)
    }

    /// Counts for a snapshot as seen by `user_id`
    pub fn counts(&self, events: &[ReactionEvent], user_id: &UserId) -> Vec<ReactionCount> {
        reaction_counts(events, user_id)
    }

    /// Toggle a reaction against a store and return the applied request
    #[instrument(skip(self, store, request), fields(emoji = %request.emoji, user_id = %request.user_id))]
    pub fn toggle<S>(&self, store: &mut S, request: &ToggleReactionRequest) -> ServiceResult<ReactionRequest>
    where
        S: ReactionStore + ?Sized,
    {
        request.validate()?;
        let emoji = request.emoji.trim();
        if emoji.is_empty() {
            return Err(msgkit_core::DomainError::EmptyEmoji.into());
        }

        let snapshot = store.snapshot()?;
        let change = toggle_request(&snapshot, &request.user_id, request.user_name.as_deref(), emoji);

        match &change {
            ReactionRequest::Add(add) => {
                store.add(&add.emoji, &add.user_id, add.user_name.as_deref())?;
            }
            ReactionRequest::Remove(remove) => {
                store.remove(&remove.id)?;
            }
        }

        debug!(request = change.request_type(), "Reaction toggled");
        Ok(change)
    }
}
