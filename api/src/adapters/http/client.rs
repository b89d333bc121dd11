//! REST document API client implementation
//!
//! Talks to a generic JSON document service:
//! - `GET    {base}/collections/{c}/documents`       -> `{ "documents": [{ "id", "data" }] }`
//! - `GET    {base}/collections/{c}/documents/{id}`  -> `{ "id", "data" }`
//! - `PUT    {base}/collections/{c}/documents/{id}`  body: document
//! - `PATCH  {base}/collections/{c}/documents/{id}`  body: fields
//! - `DELETE {base}/collections/{c}/documents/{id}`
//! - `POST   {base}/collections/{c}/documents`       body: document -> `{ "id" }`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};
use urlencoding::encode;

use crate::domain::ports::{DocumentStore, StoredDocument};
use crate::error::StoreError;

/// HTTP implementation of DocumentStore
pub struct HttpDocumentStore {
    http: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct DocumentResponse {
    id: String,
    data: Value,
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<DocumentResponse>,
}

#[derive(Deserialize)]
struct CreateResponse {
    id: String,
}

impl From<DocumentResponse> for StoredDocument {
    fn from(r: DocumentResponse) -> Self {
        StoredDocument::new(r.id, r.data)
    }
}

/// Map a non-success status to the store error taxonomy
pub(crate) fn classify_status(status: StatusCode, message: String) -> StoreError {
    match status.as_u16() {
        401 | 403 => StoreError::PermissionDenied(message),
        404 => StoreError::NotFound(message),
        408 | 429 | 500..=599 => StoreError::Unreachable(format!("{}: {}", status, message)),
        _ => StoreError::Backend(format!("{}: {}", status, message)),
    }
}

/// Map a transport failure to the store error taxonomy
fn classify_transport(e: reqwest::Error) -> StoreError {
    if e.is_timeout() || e.is_connect() || e.is_request() {
        StoreError::Unreachable(e.to_string())
    } else if e.is_decode() {
        StoreError::Serialization(e.to_string())
    } else {
        StoreError::Backend(e.to_string())
    }
}

impl HttpDocumentStore {
    pub fn new(base_url: String, token: Option<String>, timeout: Duration) -> Result<Self, StoreError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/collections/{}/documents", self.base_url, encode(collection))
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), encode(id))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreError> {
        self.authorize(request)
            .send()
            .await
            .map_err(classify_transport)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StoreError::Serialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(classify_status(status, message))
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), StoreError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(classify_status(status, message))
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let response = self
            .send(self.http.get(self.document_url(collection, id)))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let doc: DocumentResponse = self.handle_response(response).await?;
        Ok(Some(doc.data))
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let response = self
            .send(self.http.get(self.collection_url(collection)))
            .await?;

        // A collection nobody has written to yet
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let list: ListResponse = self.handle_response(response).await?;
        Ok(list.documents.into_iter().map(Into::into).collect())
    }

    async fn set(&self, collection: &str, id: &str, data: &Value) -> Result<(), StoreError> {
        let response = self
            .send(self.http.put(self.document_url(collection, id)).json(data))
            .await?;

        self.handle_empty_response(response).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<(), StoreError> {
        let response = self
            .send(self.http.patch(self.document_url(collection, id)).json(fields))
            .await?;

        self.handle_empty_response(response).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let response = self
            .send(self.http.delete(self.document_url(collection, id)))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        self.handle_empty_response(response).await
    }

    async fn create(&self, collection: &str, data: &Value) -> Result<String, StoreError> {
        let response = self
            .send(self.http.post(self.collection_url(collection)).json(data))
            .await?;

        let created: CreateResponse = self.handle_response(response).await?;
        Ok(created.id)
    }
}
