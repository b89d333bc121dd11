//! Adapters layer
//!
//! Implementations of the DocumentStore port.

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::HttpDocumentStore;
pub use memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
