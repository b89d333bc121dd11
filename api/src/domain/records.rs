//! Collection names and the record traits the content facade is generic over

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use super::defaults;
use crate::error::DomainError;
use super::entities::{
    Inquiry, InquiryStatus, PortfolioProject, ServicePackage, SiteContent, SiteSettings,
    Testimonial,
};

/// Named collections in the document store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Packages,
    Projects,
    Testimonials,
    Inquiries,
    SiteContent,
    Settings,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Packages,
        Collection::Projects,
        Collection::Testimonials,
        Collection::Inquiries,
        Collection::SiteContent,
        Collection::Settings,
    ];

    /// Name of the collection in the store
    pub fn name(self) -> &'static str {
        match self {
            Collection::Packages => "packages",
            Collection::Projects => "projects",
            Collection::Testimonials => "testimonials",
            Collection::Inquiries => "inquiries",
            Collection::SiteContent => "site_content",
            Collection::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A member of an arbitrary-id collection
pub trait CatalogRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Built-in fallback list, already in display order
    fn defaults() -> Vec<Self>;

    /// Put records into display order. Must be a stable sort.
    fn arrange(_records: &mut [Self]) {}

    /// Stamp fields the store owns before an append
    fn prepare_append(&mut self, _now: DateTime<Utc>) {}

    /// Business rules checked before an operator save
    fn validate(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

/// A single named document
pub trait SingletonRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;
    const DOCUMENT_ID: &'static str;

    fn default_document() -> Self;
}

impl CatalogRecord for ServicePackage {
    const COLLECTION: Collection = Collection::Packages;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn defaults() -> Vec<Self> {
        defaults::packages()
    }

    fn arrange(records: &mut [Self]) {
        records.sort_by_key(|p| p.order);
    }
}

impl CatalogRecord for PortfolioProject {
    const COLLECTION: Collection = Collection::Projects;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn defaults() -> Vec<Self> {
        defaults::projects()
    }
}

impl CatalogRecord for Testimonial {
    const COLLECTION: Collection = Collection::Testimonials;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn defaults() -> Vec<Self> {
        defaults::testimonials()
    }

    fn validate(&self) -> Result<(), DomainError> {
        Testimonial::validate(self)
    }
}

impl CatalogRecord for Inquiry {
    const COLLECTION: Collection = Collection::Inquiries;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn defaults() -> Vec<Self> {
        Vec::new()
    }

    // Newest first
    fn arrange(records: &mut [Self]) {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    fn prepare_append(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.status = InquiryStatus::New;
    }
}

impl SingletonRecord for SiteContent {
    const COLLECTION: Collection = Collection::SiteContent;
    const DOCUMENT_ID: &'static str = "main";

    fn default_document() -> Self {
        defaults::site_content()
    }
}

impl SingletonRecord for SiteSettings {
    const COLLECTION: Collection = Collection::Settings;
    const DOCUMENT_ID: &'static str = "global";

    fn default_document() -> Self {
        defaults::settings()
    }
}
