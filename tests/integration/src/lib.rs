//! Integration test utilities for msgkit
//!
//! Builds service contexts from environment-style configuration and
//! provides shared roster and reaction fixtures.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
