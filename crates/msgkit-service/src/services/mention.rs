//! Mention service
//!
//! Splits message text into plain and `@mention` segments resolved against
//! the roster.

use msgkit_core::{MentionPrecedence, MentionUser, Roster, UserId};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::instrument;

use crate::dto::MentionSegment;

use super::context::ServiceContext;

/// `@` then one word, optionally a second word on the same line
static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(\w+)(?:[^\S\n]+(\w+))?").expect("mention regex pattern is valid")
});

/// Stateless mention parser over a borrowed roster
#[derive(Debug, Clone, Copy)]
pub struct MentionParser<'r> {
    roster: &'r Roster,
    precedence: MentionPrecedence,
}

impl<'r> MentionParser<'r> {
    pub fn new(roster: &'r Roster, precedence: MentionPrecedence) -> Self {
        Self { roster, precedence }
    }

    /// Split `text` into segments.
    ///
    /// Concatenating every segment's content gives back `text` exactly. An
    /// `@` directly after a word character (`bob@example.com`) is not a
    /// mention.
    pub fn parse(&self, text: &str) -> Vec<MentionSegment> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for caps in MENTION_RE.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let start = whole.start();
            if start < cursor || follows_word_char(text, start) {
                continue;
            }

            let (end, user) = self.resolve(text, &caps);
            if start > cursor {
                segments.push(MentionSegment::text(&text[cursor..start]));
            }
            segments.push(MentionSegment::mention(
                &text[start..end],
                user.map(|u| u.id.clone()),
            ));
            cursor = end;
        }

        if cursor < text.len() {
            segments.push(MentionSegment::text(&text[cursor..]));
        }
        segments
    }

    /// Ids of resolved mentions, de-duplicated in first-seen order
    pub fn mentioned_users(&self, text: &str) -> Vec<UserId> {
        let mut ids: Vec<UserId> = Vec::new();
        for id in self.parse(text).into_iter().filter_map(|s| s.user_id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Pick the span of one match and the roster entry it names.
    ///
    /// Returns the end offset of the chosen span.
    fn resolve(&self, text: &str, caps: &Captures<'_>) -> (usize, Option<&'r MentionUser>) {
        let first = caps
            .get(1)
            .map_or((0, 0), |m| (m.start(), m.end()));

        if let Some(second) = caps.get(2) {
            let pair = &text[first.0..second.end()];
            if let Some(user) = self.roster.find_by_name(pair) {
                return (second.end(), Some(user));
            }
            if self.precedence.keeps_unresolved_pair() {
                return (second.end(), None);
            }
        }

        let word = &text[first.0..first.1];
        (first.1, self.roster.find_by_name(word))
    }
}

fn follows_word_char(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Mention service
pub struct MentionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MentionService<'a> {
    /// Create a new MentionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn parser(&self) -> MentionParser<'a> {
        MentionParser::new(self.ctx.roster(), self.ctx.config().mentions.precedence)
    }

    /// Segments for a message body
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub fn segments(&self, text: &str) -> Vec<MentionSegment> {
        self.parser().parse(text)
    }

    /// Users a message notifies
    pub fn mentioned_users(&self, text: &str) -> Vec<UserId> {
        self.parser().mentioned_users(text)
    }
}
