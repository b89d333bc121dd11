//! Unified error types for the Aster API
//!
//! This module defines error types for each layer:
//! - `StoreError`: Remote document store failures (reported by adapters)
//! - `StoreWriteError`: A failed write through the content facade
//! - `DomainError`: Core business rule violations
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors reported by a `DocumentStore` adapter
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Store unreachable: {0}")]
    Unreachable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Write operations exposed by the content facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Upsert,
    Remove,
    UpdateField,
    Append,
}

impl std::fmt::Display for WriteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteOp::Upsert => write!(f, "upsert"),
            WriteOp::Remove => write!(f, "remove"),
            WriteOp::UpdateField => write!(f, "update"),
            WriteOp::Append => write!(f, "append"),
        }
    }
}

/// A write through the facade failed. Never retried, never swallowed.
#[derive(Debug, Clone, Error)]
#[error("{op} on {collection}/{} failed: {source}", .id.as_deref().unwrap_or("<new>"))]
pub struct StoreWriteError {
    pub op: WriteOp,
    pub collection: &'static str,
    pub id: Option<String>,
    #[source]
    pub source: StoreError,
}

impl StoreWriteError {
    pub fn new(op: WriteOp, collection: &'static str, id: Option<&str>, source: StoreError) -> Self {
        Self {
            op,
            collection,
            id: id.map(str::to_string),
            source,
        }
    }
}

/// Domain layer errors - pure business rule errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    StoreWrite(#[from] StoreWriteError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    /// Status, public error label and optional details for this error
    pub(crate) fn parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::StoreWrite(e) => match &e.source {
                StoreError::PermissionDenied(_) => (
                    StatusCode::FORBIDDEN,
                    "Save failed, check permissions",
                    Some(e.to_string()),
                ),
                StoreError::NotFound(_) => {
                    (StatusCode::NOT_FOUND, "Not found", Some(e.to_string()))
                }
                StoreError::Unreachable(_) => (
                    StatusCode::BAD_GATEWAY,
                    "Content store unavailable",
                    None,
                ),
                StoreError::Serialization(_) | StoreError::Backend(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Save failed",
                    None,
                ),
            },
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_message_names_operation_and_target() {
        let err = StoreWriteError::new(
            WriteOp::UpdateField,
            "inquiries",
            Some("x1"),
            StoreError::NotFound("inquiries/x1".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "update on inquiries/x1 failed: Document not found: inquiries/x1"
        );
    }

    #[test]
    fn write_error_without_id_renders_placeholder() {
        let err = StoreWriteError::new(
            WriteOp::Append,
            "inquiries",
            None,
            StoreError::Unreachable("timeout".to_string()),
        );
        assert!(err.to_string().starts_with("append on inquiries/<new> failed"));
    }

    #[test]
    fn permission_denied_write_maps_to_forbidden() {
        let err = AppError::from(StoreWriteError::new(
            WriteOp::Upsert,
            "packages",
            Some("1"),
            StoreError::PermissionDenied("rules".to_string()),
        ));
        let (status, label, _) = err.parts();
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(label, "Save failed, check permissions");
    }

    #[test]
    fn missing_document_write_maps_to_not_found() {
        let err = AppError::from(StoreWriteError::new(
            WriteOp::UpdateField,
            "inquiries",
            Some("x1"),
            StoreError::NotFound("inquiries/x1".to_string()),
        ));
        assert_eq!(err.parts().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::from(DomainError::Validation("name is required".to_string()));
        let (status, _, details) = err.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(details.as_deref(), Some("name is required"));
    }
}
