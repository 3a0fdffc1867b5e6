//! Requests emitted towards the external reaction store

mod reaction_request;

pub use reaction_request::{AddReaction, ReactionRequest, RemoveReaction};
