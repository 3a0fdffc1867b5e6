//! Store traits (ports) - the seams to external collaborators

mod stores;

pub use stores::{BlobReader, ReactionStore, RepoResult};
