//! Remote store client port
//!
//! A document store addressed by `(collection, document id)`. The content
//! facade is the only caller; consumers never see this trait.

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Length of ids produced by `generate_document_id`
pub const DOCUMENT_ID_LEN: usize = 20;

/// A document as returned by a collection listing
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Value,
}

impl StoredDocument {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document, `None` if it does not exist
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Fetch every document in a collection, in the store's native order
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError>;

    /// Create or overwrite a document
    async fn set(&self, collection: &str, id: &str, data: &Value) -> Result<(), StoreError>;

    /// Overwrite top-level fields of an existing document.
    /// Fails with `StoreError::NotFound` if the document does not exist.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<(), StoreError>;

    /// Delete a document. Deleting a missing document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Create a document under a store-generated id and return that id
    async fn create(&self, collection: &str, data: &Value) -> Result<String, StoreError>;
}

/// Random alphanumeric id in the shape hosted document stores hand out
pub fn generate_document_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LEN)
        .map(char::from)
        .collect()
}
