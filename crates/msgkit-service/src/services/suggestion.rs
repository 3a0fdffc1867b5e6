//! Mention suggestion dropdown
//!
//! Tracks the `@partial` being typed before the cursor, filters the roster
//! and handles keyboard navigation and completion.

use msgkit_core::{MentionUser, Roster};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::dto::MentionCompletion;

use super::context::ServiceContext;

/// Trailing `@partial` at the start of input or after whitespace
static TRAILING_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)@(\w*)$").expect("trailing mention regex pattern is valid"));

/// Keys the dropdown reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Tab,
    Escape,
    Other,
}

impl std::str::FromStr for SuggestionKey {
    type Err = std::convert::Infallible;

    /// Parse a DOM-style key name; unknown names map to `Other`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        })
    }
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not consumed; the input should handle it normally
    Ignored,
    /// Highlight moved to this index
    Moved(usize),
    /// Dropdown closed without inserting anything
    Dismissed,
    /// A candidate was inserted
    Committed(MentionCompletion),
}

impl KeyOutcome {
    /// Whether the caller should suppress the key's default action
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Transient dropdown state owned by one input widget
#[derive(Debug, Clone)]
pub struct MentionSuggestions {
    show: bool,
    query: String,
    selected_index: usize,
    /// Byte offset of the `@`
    mention_start: Option<usize>,
    /// Byte offset of the cursor when the span was captured
    mention_end: usize,
    candidates: Vec<MentionUser>,
    max: usize,
}

impl MentionSuggestions {
    /// Hidden dropdown showing at most `max` candidates
    pub fn new(max: usize) -> Self {
        Self {
            show: false,
            query: String::new(),
            selected_index: 0,
            mention_start: None,
            mention_end: 0,
            candidates: Vec::new(),
            max,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.show
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[inline]
    pub fn mention_start(&self) -> Option<usize> {
        self.mention_start
    }

    /// Filtered candidates in roster order
    #[inline]
    pub fn candidates(&self) -> &[MentionUser] {
        &self.candidates
    }

    /// Currently highlighted candidate
    pub fn selected(&self) -> Option<&MentionUser> {
        if self.show {
            self.candidates.get(self.selected_index)
        } else {
            None
        }
    }

    /// Re-scan after the text or cursor changed.
    ///
    /// `cursor` is a byte offset; it is clamped to the text and moved back
    /// to the nearest char boundary.
    pub fn update(&mut self, roster: &Roster, text: &str, cursor: usize) {
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }

        let Some(caps) = TRAILING_MENTION_RE.captures(&text[..cursor]) else {
            self.hide();
            return;
        };
        let Some(partial) = caps.get(1) else {
            self.hide();
            return;
        };

        let candidates: Vec<MentionUser> = roster
            .search(partial.as_str(), self.max)
            .into_iter()
            .cloned()
            .collect();
        if candidates.is_empty() {
            self.hide();
            return;
        }

        self.show = true;
        self.query = partial.as_str().to_string();
        self.selected_index = 0;
        // `@` is the byte just before the captured word
        self.mention_start = Some(partial.start() - 1);
        self.mention_end = cursor;
        self.candidates = candidates;
    }

    /// Handle a key press against the current input text
    pub fn handle_key(&mut self, key: SuggestionKey, text: &str) -> KeyOutcome {
        if !self.show || self.candidates.is_empty() {
            return KeyOutcome::Ignored;
        }

        let len = self.candidates.len();
        match key {
            SuggestionKey::ArrowDown => {
                self.selected_index = (self.selected_index + 1) % len;
                KeyOutcome::Moved(self.selected_index)
            }
            SuggestionKey::ArrowUp => {
                self.selected_index = (self.selected_index + len - 1) % len;
                KeyOutcome::Moved(self.selected_index)
            }
            SuggestionKey::Enter | SuggestionKey::Tab => self
                .select(self.selected_index, text)
                .map_or(KeyOutcome::Ignored, KeyOutcome::Committed),
            SuggestionKey::Escape => {
                self.hide();
                KeyOutcome::Dismissed
            }
            SuggestionKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Commit the candidate at `index`.
    ///
    /// Replaces the `@partial` span with `@Name ` and hides the dropdown.
    /// Returns `None` when hidden, out of range, or when `text` no longer
    /// contains the captured span.
    pub fn select(&mut self, index: usize, text: &str) -> Option<MentionCompletion> {
        if !self.show {
            return None;
        }
        let start = self.mention_start?;
        let end = self.mention_end;
        let user = self.candidates.get(index)?.clone();
        if end > text.len() || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return None;
        }

        let inserted = format!("@{} ", user.name);
        let mut new_text = String::with_capacity(text.len() + inserted.len());
        new_text.push_str(&text[..start]);
        new_text.push_str(&inserted);
        new_text.push_str(&text[end..]);

        self.hide();
        debug!(user_id = %user.id, start, end, "Mention committed");

        Some(MentionCompletion {
            cursor: start + inserted.len(),
            text: new_text,
            user,
            start,
            end,
        })
    }

    /// Close the dropdown and forget the captured span
    pub fn hide(&mut self) {
        self.show = false;
        self.query.clear();
        self.selected_index = 0;
        self.mention_start = None;
        self.mention_end = 0;
        self.candidates.clear();
    }
}

impl Default for MentionSuggestions {
    fn default() -> Self {
        Self::new(msgkit_common::MentionConfig::default().max_suggestions)
    }
}

/// Suggestion service
pub struct SuggestionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SuggestionService<'a> {
    /// Create a new SuggestionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fresh dropdown state sized from configuration
    pub fn state(&self) -> MentionSuggestions {
        MentionSuggestions::new(self.ctx.config().mentions.max_suggestions)
    }

    /// Re-scan `state` against the context roster
    pub fn update(&self, state: &mut MentionSuggestions, text: &str, cursor: usize) {
        state.update(self.ctx.roster(), text, cursor);
    }
}
