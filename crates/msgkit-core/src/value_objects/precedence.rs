//! Mention precedence policy
//!
//! A mention candidate after `@` may span one or two words. The policy
//! decides which span wins when both are possible.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a mention parser chooses between one-word and two-word candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionPrecedence {
    /// Prefer the two-word candidate only when it names a roster entry,
    /// otherwise fall back to the single word after `@`.
    #[default]
    RosterMatch,
    /// Always consume up to two words after `@`, resolved or not.
    Greedy,
}

impl MentionPrecedence {
    /// Whether an unresolved two-word candidate may still be kept
    #[inline]
    pub fn keeps_unresolved_pair(self) -> bool {
        matches!(self, Self::Greedy)
    }
}

impl fmt::Display for MentionPrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RosterMatch => write!(f, "roster_match"),
            Self::Greedy => write!(f, "greedy"),
        }
    }
}

/// Error when parsing a precedence policy name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid mention precedence: {0}")]
pub struct PrecedenceParseError(pub String);

impl FromStr for MentionPrecedence {
    type Err = PrecedenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "roster_match" | "roster" => Ok(Self::RosterMatch),
            "greedy" => Ok(Self::Greedy),
            _ => Err(PrecedenceParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_roster_match() {
        assert_eq!(MentionPrecedence::default(), MentionPrecedence::RosterMatch);
    }

    #[test]
    fn test_parse() {
        assert_eq!("greedy".parse(), Ok(MentionPrecedence::Greedy));
        assert_eq!("Roster-Match".parse(), Ok(MentionPrecedence::RosterMatch));
        assert!("longest".parse::<MentionPrecedence>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_serde() {
        let json = serde_json::to_string(&MentionPrecedence::Greedy).unwrap();
        assert_eq!(json, "\"greedy\"");
        assert_eq!(MentionPrecedence::Greedy.to_string(), "greedy");
    }

    #[test]
    fn test_keeps_unresolved_pair() {
        assert!(MentionPrecedence::Greedy.keeps_unresolved_pair());
        assert!(!MentionPrecedence::RosterMatch.keeps_unresolved_pair());
    }
}
