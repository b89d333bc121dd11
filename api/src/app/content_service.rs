//! Content service
//!
//! The single access layer between consumers and the document store. Reads
//! never fail: an empty, missing, unreadable or unreachable store yields the
//! built-in default content, tagged with why. Writes never fall back: every
//! failure reaches the caller as a `StoreWriteError`, with no retry.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::ports::{DocumentStore, StoredDocument};
use crate::domain::{CatalogRecord, SingletonRecord};
use crate::error::{StoreError, StoreWriteError, WriteOp};

/// Why a read served default content instead of live data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackReason {
    /// The collection holds no documents
    Empty,
    /// The singleton document does not exist
    Missing,
    PermissionDenied,
    /// Network failure or no answer within the timeout
    Unreachable,
    /// Live data exists but none of it decodes
    Malformed,
    Other,
}

impl FallbackReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackReason::Empty => "empty",
            FallbackReason::Missing => "missing",
            FallbackReason::PermissionDenied => "permission-denied",
            FallbackReason::Unreachable => "unreachable",
            FallbackReason::Malformed => "malformed",
            FallbackReason::Other => "other",
        }
    }
}

impl From<&StoreError> for FallbackReason {
    fn from(e: &StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => FallbackReason::Missing,
            StoreError::PermissionDenied(_) => FallbackReason::PermissionDenied,
            StoreError::Unreachable(_) => FallbackReason::Unreachable,
            StoreError::Serialization(_) => FallbackReason::Malformed,
            StoreError::Backend(_) => FallbackReason::Other,
        }
    }
}

/// Where the data of a read came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Live,
    Fallback(FallbackReason),
}

impl ContentSource {
    pub fn is_live(self) -> bool {
        matches!(self, ContentSource::Live)
    }

    /// Source of a view built from several reads: the first fallback, if any
    pub fn combine(self, other: ContentSource) -> ContentSource {
        match self {
            ContentSource::Live => other,
            fallback => fallback,
        }
    }

    /// `live` or `fallback:<reason>`
    pub fn label(self) -> String {
        match self {
            ContentSource::Live => "live".to_string(),
            ContentSource::Fallback(reason) => format!("fallback:{}", reason.as_str()),
        }
    }
}

impl Serialize for ContentSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Result of a read: the data plus how it was obtained
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fetched<T> {
    pub data: T,
    pub source: ContentSource,
}

impl<T> Fetched<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            source: ContentSource::Live,
        }
    }

    pub fn fallback(data: T, reason: FallbackReason) -> Self {
        Self {
            data,
            source: ContentSource::Fallback(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            data: f(self.data),
            source: self.source,
        }
    }
}

/// Operator-visible diagnostic for a read that fell back to defaults
fn report_fallback(collection: &str, reason: FallbackReason, error: Option<&StoreError>) {
    let error = error.map(ToString::to_string);
    match reason {
        FallbackReason::Empty | FallbackReason::Missing => {
            tracing::debug!(collection, reason = reason.as_str(), "No live content, serving defaults");
        }
        FallbackReason::PermissionDenied => {
            tracing::warn!(
                collection,
                error = ?error,
                "Store access denied, serving defaults. Check the store's read rules"
            );
        }
        FallbackReason::Unreachable => {
            tracing::warn!(collection, error = ?error, "Store unreachable, serving defaults");
        }
        FallbackReason::Malformed | FallbackReason::Other => {
            tracing::error!(
                collection,
                reason = reason.as_str(),
                error = ?error,
                "Store read failed, serving defaults"
            );
        }
    }
}

/// Decode live documents, injecting each store key as `id`.
/// Undecodable documents are skipped.
fn decode_documents<T: CatalogRecord>(collection: &str, docs: Vec<StoredDocument>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| {
            let mut data = doc.data;
            if let Value::Object(fields) = &mut data {
                fields.insert("id".to_string(), Value::String(doc.id.clone()));
            }
            match serde_json::from_value::<T>(data) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(collection, id = %doc.id, error = %e, "Skipping undecodable document");
                    None
                }
            }
        })
        .collect()
}

/// Facade over a `DocumentStore`
pub struct ContentService<S>
where
    S: DocumentStore + ?Sized,
{
    store: Arc<S>,
    timeout: Duration,
}

impl<S> ContentService<S>
where
    S: DocumentStore + ?Sized,
{
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(store: Arc<S>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Run one store round trip under the configured timeout
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Unreachable(format!(
                "no response within {}ms",
                self.timeout.as_millis()
            ))),
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// All records of `T`'s collection in display order, or the defaults
    pub async fn fetch_collection<T: CatalogRecord>(&self) -> Fetched<Vec<T>> {
        let name = T::COLLECTION.name();

        let docs = match self.bounded(self.store.list(name)).await {
            Ok(docs) => docs,
            Err(StoreError::NotFound(_)) => {
                report_fallback(name, FallbackReason::Empty, None);
                return Fetched::fallback(T::defaults(), FallbackReason::Empty);
            }
            Err(e) => {
                let reason = FallbackReason::from(&e);
                report_fallback(name, reason, Some(&e));
                return Fetched::fallback(T::defaults(), reason);
            }
        };

        if docs.is_empty() {
            report_fallback(name, FallbackReason::Empty, None);
            return Fetched::fallback(T::defaults(), FallbackReason::Empty);
        }

        let mut records = decode_documents::<T>(name, docs);
        if records.is_empty() {
            report_fallback(name, FallbackReason::Malformed, None);
            return Fetched::fallback(T::defaults(), FallbackReason::Malformed);
        }

        T::arrange(&mut records);
        Fetched::live(records)
    }

    /// The singleton document `T`, or its default
    ///
    /// A live document is returned as stored, even when it lacks sections
    /// the default has.
    pub async fn fetch_singleton<T: SingletonRecord>(&self) -> Fetched<T> {
        let name = T::COLLECTION.name();

        let data = match self.bounded(self.store.get(name, T::DOCUMENT_ID)).await {
            Ok(Some(data)) => data,
            Ok(None) => {
                report_fallback(name, FallbackReason::Missing, None);
                return Fetched::fallback(T::default_document(), FallbackReason::Missing);
            }
            Err(e) => {
                let reason = FallbackReason::from(&e);
                report_fallback(name, reason, Some(&e));
                return Fetched::fallback(T::default_document(), reason);
            }
        };

        match serde_json::from_value::<T>(data) {
            Ok(doc) => Fetched::live(doc),
            Err(e) => {
                let e = StoreError::from(e);
                report_fallback(name, FallbackReason::Malformed, Some(&e));
                Fetched::fallback(T::default_document(), FallbackReason::Malformed)
            }
        }
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    async fn write<T>(
        &self,
        op: WriteOp,
        collection: &'static str,
        id: Option<&str>,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreWriteError> {
        match self.bounded(call).await {
            Ok(value) => {
                tracing::info!(op = %op, collection, id = ?id, "Store write committed");
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(op = %op, collection, id = ?id, error = %e, "Store write failed");
                Err(StoreWriteError::new(op, collection, id, e))
            }
        }
    }

    /// Create or overwrite one record under its id
    pub async fn upsert<T: CatalogRecord>(&self, record: &T) -> Result<(), StoreWriteError> {
        let name = T::COLLECTION.name();
        let id = record.id();
        let fail = |e: StoreError| StoreWriteError::new(WriteOp::Upsert, name, Some(id), e);

        if id.trim().is_empty() {
            return Err(fail(StoreError::Serialization(
                "record has no id".to_string(),
            )));
        }
        let data = serde_json::to_value(record).map_err(|e| fail(e.into()))?;

        self.write(WriteOp::Upsert, name, Some(id), self.store.set(name, id, &data))
            .await
    }

    /// Replace the whole singleton document. Last write wins.
    pub async fn save_singleton<T: SingletonRecord>(&self, doc: &T) -> Result<(), StoreWriteError> {
        let name = T::COLLECTION.name();
        let data = serde_json::to_value(doc).map_err(|e| {
            StoreWriteError::new(WriteOp::Upsert, name, Some(T::DOCUMENT_ID), e.into())
        })?;

        self.write(
            WriteOp::Upsert,
            name,
            Some(T::DOCUMENT_ID),
            self.store.set(name, T::DOCUMENT_ID, &data),
        )
        .await
    }

    /// Delete one record by id
    pub async fn remove<T: CatalogRecord>(&self, id: &str) -> Result<(), StoreWriteError> {
        let name = T::COLLECTION.name();
        self.write(WriteOp::Remove, name, Some(id), self.store.delete(name, id))
            .await
    }

    /// Overwrite some top-level fields of one existing record
    pub async fn update_field<T: CatalogRecord>(
        &self,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreWriteError> {
        let name = T::COLLECTION.name();
        self.write(
            WriteOp::UpdateField,
            name,
            Some(id),
            self.store.update(name, id, &fields),
        )
        .await
    }

    /// Store a new record under a generated id, stamping server-owned fields.
    /// Returns the record as stored.
    pub async fn append<T: CatalogRecord>(&self, mut record: T) -> Result<T, StoreWriteError> {
        let name = T::COLLECTION.name();
        record.prepare_append(Utc::now());

        let mut data = serde_json::to_value(&record)
            .map_err(|e| StoreWriteError::new(WriteOp::Append, name, None, e.into()))?;
        if let Value::Object(fields) = &mut data {
            fields.remove("id");
        }

        let id = self
            .write(WriteOp::Append, name, None, self.store.create(name, &data))
            .await?;
        record.set_id(id);
        Ok(record)
    }
}
