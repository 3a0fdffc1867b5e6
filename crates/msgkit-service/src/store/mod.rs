//! Store implementations backing the core traits

mod fs;
mod memory;

pub use fs::FsBlobReader;
pub use memory::MemoryReactionStore;
