//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod admin;
pub mod inquiries;
pub mod public;

use axum::{
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::app::Fetched;

pub use admin::*;
pub use inquiries::submit_inquiry;
pub use public::*;

/// Reports whether a response body is live data or default content
pub const CONTENT_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-content-source");

/// Public reads return the bare data; the source goes into a header
impl<T: Serialize> IntoResponse for Fetched<T> {
    fn into_response(self) -> Response {
        let source = HeaderValue::from_str(&self.source.label())
            .unwrap_or_else(|_| HeaderValue::from_static("unknown"));

        ([(CONTENT_SOURCE_HEADER, source)], Json(self.data)).into_response()
    }
}
