//! HTTP adapter
//!
//! DocumentStore backed by a remote REST document API.

pub mod client;

pub use client::HttpDocumentStore;
