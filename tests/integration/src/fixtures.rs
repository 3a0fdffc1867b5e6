//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use msgkit_core::{MentionUser, ReactionEvent, Roster};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Team roster used across scenarios
pub fn team_roster() -> Roster {
    Roster::new(vec![
        MentionUser::new("1", "Alice").with_role("Owner"),
        MentionUser::new("2", "John Smith"),
        MentionUser::new("3", "John"),
        MentionUser::new("4", "Bob").with_avatar("https://cdn.example/bob.png"),
    ])
}

/// A message's reactions as the store would report them
pub fn reaction_snapshot() -> Vec<ReactionEvent> {
    vec![
        ReactionEvent::new("r1", "👍", "1").with_user_name("Alice"),
        ReactionEvent::new("r2", "🎉", "4").with_user_name("Bob"),
        ReactionEvent::new("r3", "👍", "2").with_user_name("John Smith"),
    ]
}

/// A reaction by a throwaway user
pub fn unique_reaction(emoji: &str) -> ReactionEvent {
    let suffix = unique_suffix();
    ReactionEvent::new(format!("fixture-{suffix}"), emoji, format!("user-{suffix}"))
}
