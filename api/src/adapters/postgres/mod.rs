//! PostgreSQL adapters
//!
//! DocumentStore implementation using SeaORM and PostgreSQL.

pub mod document_store;


pub use document_store::PostgresDocumentStore;
