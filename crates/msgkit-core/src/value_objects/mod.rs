//! Value objects - immutable types that represent domain concepts

mod ids;
mod precedence;

pub use ids::{ReactionId, UserId};
pub use precedence::{MentionPrecedence, PrecedenceParseError};
