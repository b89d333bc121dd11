//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod document_store;

pub use document_store::{generate_document_id, DocumentStore, StoredDocument};
