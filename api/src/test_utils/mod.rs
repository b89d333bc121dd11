//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks wrap the in-memory store rather than using mockall, so tests see
//! real store semantics plus whatever failure they inject.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
