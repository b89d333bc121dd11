//! Application layer
//!
//! The content facade and the use cases built on it.
//! Services hold the facade behind an `Arc` and never touch a store directly.

pub mod catalog_service;
pub mod content_service;
pub mod dashboard;
pub mod inquiry_service;
pub mod page_service;

pub use catalog_service::CatalogService;
pub use content_service::{ContentService, ContentSource, FallbackReason, Fetched};
pub use dashboard::Dashboard;
pub use inquiry_service::{InquiryFilter, InquiryService, SubmissionOutcome};
pub use page_service::{
    AboutView, ContactView, HomeView, PageService, PortfolioView, ServicesView,
};
