//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Records held by the document store
//! - `defaults`: Built-in fallback content
//! - `records`: Collection names and the traits the facade is generic over
//! - `ports`: Trait definitions for external dependencies

pub mod defaults;
pub mod entities;
pub mod ports;
pub mod records;

pub use records::{CatalogRecord, Collection, SingletonRecord};
