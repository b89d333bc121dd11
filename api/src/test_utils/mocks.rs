//! Mock implementations of port traits
//!
//! `MockDocumentStore` wraps the in-memory store and can be configured to
//! fail reads or writes, or to answer slowly, so tests can drive every
//! fallback and write-error path of the content facade.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::adapters::InMemoryDocumentStore;
use crate::domain::ports::{DocumentStore, StoredDocument};
use crate::domain::CatalogRecord;
use crate::error::StoreError;

/// Failure a mock store should report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    NotFound,
    PermissionDenied,
    Unreachable,
    Backend,
}

impl Failure {
    fn error(self, context: &str) -> StoreError {
        let message = format!("injected failure: {}", context);
        match self {
            Failure::NotFound => StoreError::NotFound(message),
            Failure::PermissionDenied => StoreError::PermissionDenied(message),
            Failure::Unreachable => StoreError::Unreachable(message),
            Failure::Backend => StoreError::Backend(message),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockDocumentStore {
    inner: InMemoryDocumentStore,
    read_failure: Arc<RwLock<Option<Failure>>>,
    write_failure: Arc<RwLock<Option<Failure>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    writes: Arc<RwLock<Vec<String>>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose reads all fail
    pub fn failing_reads(self, failure: Failure) -> Self {
        self.set_read_failure(Some(failure));
        self
    }

    /// Create a mock whose writes all fail
    pub fn failing_writes(self, failure: Failure) -> Self {
        self.set_write_failure(Some(failure));
        self
    }

    /// Delay every call, to exercise timeouts
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.write().unwrap() = Some(delay);
        self
    }

    pub fn set_read_failure(&self, failure: Option<Failure>) {
        *self.read_failure.write().unwrap() = failure;
    }

    pub fn set_write_failure(&self, failure: Option<Failure>) {
        *self.write_failure.write().unwrap() = failure;
    }

    /// The backing store, for seeding and inspection
    pub fn inner(&self) -> &InMemoryDocumentStore {
        &self.inner
    }

    /// Pre-populate records under their own ids
    pub async fn seed_records<T: CatalogRecord>(&self, records: &[T]) {
        for record in records {
            let data = serde_json::to_value(record).unwrap();
            self.inner
                .seed(T::COLLECTION.name(), record.id(), data)
                .await;
        }
    }

    /// Successful writes, as "op collection/id"
    pub fn writes(&self) -> Vec<String> {
        self.writes.read().unwrap().clone()
    }

    async fn before_read(&self, context: &str) -> Result<(), StoreError> {
        self.pause().await;
        let failure = *self.read_failure.read().unwrap();
        match failure {
            Some(failure) => Err(failure.error(context)),
            None => Ok(()),
        }
    }

    async fn before_write(&self, context: &str) -> Result<(), StoreError> {
        self.pause().await;
        let failure = *self.write_failure.read().unwrap();
        match failure {
            Some(failure) => Err(failure.error(context)),
            None => Ok(()),
        }
    }

    async fn pause(&self) {
        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn record_write(&self, entry: String) {
        self.writes.write().unwrap().push(entry);
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        self.before_read(&format!("get {}/{}", collection, id)).await?;
        self.inner.get(collection, id).await
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        self.before_read(&format!("list {}", collection)).await?;
        self.inner.list(collection).await
    }

    async fn set(&self, collection: &str, id: &str, data: &Value) -> Result<(), StoreError> {
        self.before_write(&format!("set {}/{}", collection, id)).await?;
        self.inner.set(collection, id, data).await?;
        self.record_write(format!("set {}/{}", collection, id));
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<(), StoreError> {
        self.before_write(&format!("update {}/{}", collection, id)).await?;
        self.inner.update(collection, id, fields).await?;
        self.record_write(format!("update {}/{}", collection, id));
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.before_write(&format!("delete {}/{}", collection, id)).await?;
        self.inner.delete(collection, id).await?;
        self.record_write(format!("delete {}/{}", collection, id));
        Ok(())
    }

    async fn create(&self, collection: &str, data: &Value) -> Result<String, StoreError> {
        self.before_write(&format!("create {}", collection)).await?;
        let id = self.inner.create(collection, data).await?;
        self.record_write(format!("create {}/{}", collection, id));
        Ok(id)
    }
}
