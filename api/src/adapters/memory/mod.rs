//! In-memory adapter
//!
//! Process-local document store for development and tests.

pub mod store;

pub use store::InMemoryDocumentStore;
