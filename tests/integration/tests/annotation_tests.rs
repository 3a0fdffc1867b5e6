//! Annotation Integration Tests
//!
//! Drives the services the way a message widget does: configuration from
//! environment-style variables, one context, several render passes.
//!
//! Run with: cargo test -p integration-tests --test annotation_tests

use std::io::Write;
use std::sync::Arc;

use integration_tests::{
    config_from_pairs, fixtures::*, test_context, test_context_with_roster,
};
use msgkit_core::{
    Attachment, MentionPrecedence, MentionUser, Presence, PresenceStatus, ReactionStore,
    ReadReceipt, Roster, UserId,
};
use msgkit_service::{
    summarize_receipts, AttachmentService, FsBlobReader, KeyOutcome, LinkPreviewState,
    LinkService, MemoryReactionStore, MentionSegment, MentionService, PresenceService,
    ReactionService, ServiceContext, SuggestionKey, SuggestionService, ToggleReactionRequest,
};

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_defaults_from_empty_environment() {
    let config = config_from_pairs(&[]).unwrap();
    assert_eq!(config.app.name, "msgkit");
    assert_eq!(config.mentions.precedence, MentionPrecedence::RosterMatch);
    assert_eq!(config.mentions.max_suggestions, 5);
    assert_eq!(config.links.max_previews, 3);
    assert_eq!(config.reactions.quick_reactions.len(), 6);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    assert!(config_from_pairs(&[("MSGKIT_MENTION_PRECEDENCE", "longest")]).is_err());
    assert!(config_from_pairs(&[("MSGKIT_MAX_SUGGESTIONS", "0")]).is_err());
    assert!(config_from_pairs(&[("MSGKIT_MAX_LINK_PREVIEWS", "many")]).is_err());
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[test]
fn test_reaction_bar_round_trip() {
    let ctx = test_context(&[("MSGKIT_QUICK_REACTIONS", "👍, 🎉")]).unwrap();
    let service = ReactionService::new(&ctx);
    assert_eq!(service.quick_reactions(), ["👍".to_string(), "🎉".to_string()]);

    let mut store = MemoryReactionStore::with_events(reaction_snapshot());
    let bob = UserId::new("4");

    let counts = service.counts(&store.snapshot().unwrap(), &bob);
    assert_eq!(counts[0].count, 2);
    assert!(!counts[0].me);

    let request = ToggleReactionRequest::new("👍", "4").with_user_name("Bob");
    let added = service.toggle(&mut store, &request).unwrap();
    assert_eq!(serde_json::to_value(&added).unwrap()["type"], "ADD");

    let counts = service.counts(&store.snapshot().unwrap(), &bob);
    assert_eq!(counts[0].count, 3);
    assert!(counts[0].me);

    let removed = service.toggle(&mut store, &request).unwrap();
    assert_eq!(serde_json::to_value(&removed).unwrap()["type"], "REMOVE");
    assert_eq!(store.snapshot().unwrap(), reaction_snapshot());
}

#[test]
fn test_groups_from_store_snapshot() {
    let ctx = test_context(&[]).unwrap();
    let mut events = reaction_snapshot();
    events.push(unique_reaction("🎉"));
    let store = MemoryReactionStore::with_events(events);

    let groups = ReactionService::new(&ctx).groups(&store.snapshot().unwrap());
    let summary: Vec<_> = groups.iter().map(|g| (g.emoji.as_str(), g.count())).collect();
    assert_eq!(summary, vec![("👍", 2), ("🎉", 2)]);
}

// ============================================================================
// Mention Tests
// ============================================================================

#[test]
fn test_mention_example_from_widget() {
    let roster = Roster::new(vec![MentionUser::new("1", "Alice")]);
    let ctx = test_context_with_roster(&[], roster).unwrap();

    let segments = MentionService::new(&ctx).segments("hi @Alice how are you");
    assert_eq!(
        segments,
        vec![
            MentionSegment::text("hi "),
            MentionSegment::mention("@Alice", Some(UserId::new("1"))),
            MentionSegment::text(" how are you"),
        ]
    );
}

#[test]
fn test_greedy_precedence_from_environment() {
    let ctx = test_context(&[("MSGKIT_MENTION_PRECEDENCE", "greedy")]).unwrap();
    let segments = MentionService::new(&ctx).segments("thanks @Bob for this");
    assert_eq!(segments[1], MentionSegment::mention("@Bob for", None));
}

#[test]
fn test_typing_a_mention_then_parsing_it() {
    let ctx = test_context(&[]).unwrap();
    let suggestions = SuggestionService::new(&ctx);
    let mut state = suggestions.state();

    let typed = "ping @jo";
    suggestions.update(&mut state, typed, typed.len());
    let names: Vec<_> = state.candidates().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["John Smith", "John"]);

    let KeyOutcome::Committed(done) = state.handle_key(SuggestionKey::Enter, typed) else {
        panic!("expected the highlighted user to be inserted");
    };
    assert_eq!(done.text, "ping @John Smith ");

    let mentioned = MentionService::new(&ctx).mentioned_users(&done.text);
    assert_eq!(mentioned, vec![UserId::new("2")]);
}

// ============================================================================
// Link Tests
// ============================================================================

#[test]
fn test_link_previews_for_message() {
    let ctx = test_context(&[("MSGKIT_MAX_LINK_PREVIEWS", "2")]).unwrap();
    let text = "docs at https://www.rust-lang.org/learn and http://[broken, \
                again https://www.rust-lang.org/learn and https://third.dev";

    let previews = LinkService::new(&ctx).previews(text);
    assert_eq!(previews.len(), 2);
    assert_eq!(
        previews[0].preview().map(|p| p.title.as_str()),
        Some("rust-lang.org")
    );
    assert!(matches!(previews[1], LinkPreviewState::Error { .. }));
}

#[test]
fn test_link_previews_disabled() {
    let ctx = test_context(&[("MSGKIT_MAX_LINK_PREVIEWS", "0")]).unwrap();
    assert!(LinkService::new(&ctx).previews("https://a.com").is_empty());
}

// ============================================================================
// Attachment, Presence and Receipt Tests
// ============================================================================

#[tokio::test]
async fn test_attachment_inline_preview() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = config_from_pairs(&[("MSGKIT_MAX_INLINE_PREVIEW_BYTES", "1024")]).unwrap();
    let ctx = ServiceContext::new(
        Arc::new(config),
        Arc::new(team_roster()),
        Arc::new(FsBlobReader),
    );
    let service = AttachmentService::new(&ctx);

    let url = service.load_data_url(&path, "image/png").await.unwrap();
    assert!(url.starts_with("data:image/png;base64,"));

    let views = service.views(&[
        Attachment::new("shot.png", 4, "image/png").with_url(url),
        Attachment::new("notes.txt", 1536, "text/plain"),
    ]);
    assert_eq!(views[0].icon(), None);
    assert_eq!(views[1].size_label, "1.5 KB");
    assert_eq!(views[1].icon(), Some("file-text"));
}

#[test]
fn test_presence_and_receipts() {
    let ctx = test_context(&[]).unwrap();
    let presence = PresenceService::new(&ctx);
    let statuses = vec![
        Presence::new("4", PresenceStatus::Online),
        Presence::new("1", PresenceStatus::Offline),
    ];
    let connected: Vec<_> = presence.connected(&statuses).into_iter().cloned().collect();
    assert_eq!(connected, vec![UserId::new("4")]);
    assert_eq!(presence.label(&statuses[0]), "Online");

    let now = chrono::Utc::now();
    let receipts = vec![
        ReadReceipt::new("1", now).with_user_name("Alice"),
        ReadReceipt::new("4", now - chrono::Duration::minutes(1)).with_user_name("Bob"),
    ];
    let summary = summarize_receipts(&receipts, &UserId::new("1"));
    assert_eq!(summary.label(), "Seen by Bob");
}
