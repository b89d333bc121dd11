//! In-memory implementation of DocumentStore

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::domain::ports::{generate_document_id, DocumentStore, StoredDocument};
use crate::error::StoreError;

/// Insertion-ordered documents of one collection
#[derive(Default)]
struct CollectionData {
    order: Vec<String>,
    docs: HashMap<String, Value>,
}

impl CollectionData {
    fn put(&mut self, id: &str, data: Value) {
        if self.docs.insert(id.to_string(), data).is_none() {
            self.order.push(id.to_string());
        }
    }

    fn remove(&mut self, id: &str) {
        if self.docs.remove(id).is_some() {
            self.order.retain(|d| d != id);
        }
    }
}

/// Document store held entirely in memory. Data is lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, CollectionData>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a document
    pub async fn seed(&self, collection: &str, id: &str, data: Value) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .put(id, data);
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, |c| c.docs.len())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|c| c.docs.get(id))
            .cloned())
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        let Some(data) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(data
            .order
            .iter()
            .filter_map(|id| {
                data.docs
                    .get(id)
                    .map(|doc| StoredDocument::new(id.clone(), doc.clone()))
            })
            .collect())
    }

    async fn set(&self, collection: &str, id: &str, data: &Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .put(id, data.clone());
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|c| c.docs.get_mut(id))
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;

        let Value::Object(target) = doc else {
            return Err(StoreError::Serialization(format!(
                "{}/{} is not an object",
                collection, id
            )));
        };
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        if let Some(data) = collections.get_mut(collection) {
            data.remove(id);
        }
        Ok(())
    }

    async fn create(&self, collection: &str, data: &Value) -> Result<String, StoreError> {
        let id = generate_document_id();
        self.set(collection, &id, data).await?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn list_keeps_insertion_order_across_overwrites() {
        let store = InMemoryDocumentStore::new();
        store.set("packages", "b", &json!({"n": 1})).await.unwrap();
        store.set("packages", "a", &json!({"n": 2})).await.unwrap();
        store.set("packages", "b", &json!({"n": 3})).await.unwrap();

        let docs = store.list("packages").await.unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(docs[0].data, json!({"n": 3}));
    }

    #[tokio::test]
    async fn list_of_unknown_collection_is_empty() {
        let store = InMemoryDocumentStore::new();
        assert!(store.list("testimonials").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_merges_top_level_fields() {
        let store = InMemoryDocumentStore::new();
        store
            .seed("inquiries", "x1", json!({"name": "Rina", "status": "new"}))
            .await;

        let mut fields = Map::new();
        fields.insert("status".to_string(), json!("contacted"));
        store.update("inquiries", "x1", &fields).await.unwrap();

        let doc = store.get("inquiries", "x1").await.unwrap().unwrap();
        assert_eq!(doc, json!({"name": "Rina", "status": "contacted"}));
    }

    #[tokio::test]
    async fn update_of_missing_document_is_not_found() {
        let store = InMemoryDocumentStore::new();
        let mut fields = Map::new();
        fields.insert("status".to_string(), json!("closed"));

        let err = store.update("inquiries", "x1", &fields).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryDocumentStore::new();
        store.seed("projects", "p1", json!({})).await;
        store.delete("projects", "p1").await.unwrap();
        store.delete("projects", "p1").await.unwrap();
        assert_eq!(store.count("projects").await, 0);
    }

    #[tokio::test]
    async fn create_generates_distinct_ids() {
        let store = InMemoryDocumentStore::new();
        let a = store.create("inquiries", &json!({})).await.unwrap();
        let b = store.create("inquiries", &json!({})).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.count("inquiries").await, 2);
    }
}
