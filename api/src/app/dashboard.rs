//! Operator dashboard state
//!
//! An in-memory working copy of every collection, as an editing client
//! holds it. Edits are written through the facade first and only then
//! applied locally, so a failed write leaves the copy untouched. Inquiry
//! status is the one exception: it is applied optimistically and rolled back
//! if the write fails.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::content_service::{ContentService, ContentSource};
use crate::domain::entities::{
    Inquiry, InquiryStatus, PortfolioProject, ServicePackage, SiteContent, SiteSettings,
    Testimonial,
};
use crate::domain::ports::DocumentStore;
use crate::domain::{CatalogRecord, Collection};
use crate::error::StoreWriteError;

pub struct Dashboard<S>
where
    S: DocumentStore + ?Sized,
{
    content: Arc<ContentService<S>>,
    pub packages: Vec<ServicePackage>,
    pub projects: Vec<PortfolioProject>,
    pub testimonials: Vec<Testimonial>,
    pub inquiries: Vec<Inquiry>,
    pub site_content: SiteContent,
    pub settings: SiteSettings,
    /// Collections that loaded from defaults rather than live data
    pub fallbacks: Vec<(Collection, ContentSource)>,
}

/// Replace the record with the same id, or add it at the end
fn upsert_local<T: CatalogRecord>(records: &mut Vec<T>, record: T) {
    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

impl<S> Dashboard<S>
where
    S: DocumentStore + ?Sized,
{
    /// Load every collection; never fails
    pub async fn load(content: Arc<ContentService<S>>) -> Self {
        let (packages, projects, testimonials, inquiries, site_content, settings) = tokio::join!(
            content.fetch_collection::<ServicePackage>(),
            content.fetch_collection::<PortfolioProject>(),
            content.fetch_collection::<Testimonial>(),
            content.fetch_collection::<Inquiry>(),
            content.fetch_singleton::<SiteContent>(),
            content.fetch_singleton::<SiteSettings>(),
        );

        let fallbacks: Vec<_> = [
            (Collection::Packages, packages.source),
            (Collection::Projects, projects.source),
            (Collection::Testimonials, testimonials.source),
            (Collection::Inquiries, inquiries.source),
            (Collection::SiteContent, site_content.source),
            (Collection::Settings, settings.source),
        ]
        .into_iter()
        .filter(|(_, source)| !source.is_live())
        .collect();

        if !fallbacks.is_empty() {
            tracing::warn!(
                count = fallbacks.len(),
                "Dashboard loaded with default content for some collections"
            );
        }

        Self {
            content,
            packages: packages.data,
            projects: projects.data,
            testimonials: testimonials.data,
            inquiries: inquiries.data,
            site_content: site_content.data,
            settings: settings.data,
            fallbacks,
        }
    }

    pub async fn save_site_content(&mut self, content: SiteContent) -> Result<(), StoreWriteError> {
        self.content.save_singleton(&content).await?;
        self.site_content = content;
        Ok(())
    }

    pub async fn save_settings(&mut self, settings: SiteSettings) -> Result<(), StoreWriteError> {
        self.content.save_singleton(&settings).await?;
        self.settings = settings;
        Ok(())
    }

    pub async fn save_package(&mut self, package: ServicePackage) -> Result<(), StoreWriteError> {
        self.content.upsert(&package).await?;
        upsert_local(&mut self.packages, package);
        ServicePackage::arrange(&mut self.packages);
        Ok(())
    }

    pub async fn save_project(&mut self, project: PortfolioProject) -> Result<(), StoreWriteError> {
        self.content.upsert(&project).await?;
        upsert_local(&mut self.projects, project);
        Ok(())
    }

    pub async fn save_testimonial(
        &mut self,
        testimonial: Testimonial,
    ) -> Result<(), StoreWriteError> {
        self.content.upsert(&testimonial).await?;
        upsert_local(&mut self.testimonials, testimonial);
        Ok(())
    }

    pub async fn delete_package(&mut self, id: &str) -> Result<(), StoreWriteError> {
        self.content.remove::<ServicePackage>(id).await?;
        self.packages.retain(|p| p.id != id);
        Ok(())
    }

    pub async fn delete_project(&mut self, id: &str) -> Result<(), StoreWriteError> {
        self.content.remove::<PortfolioProject>(id).await?;
        self.projects.retain(|p| p.id != id);
        Ok(())
    }

    pub async fn delete_testimonial(&mut self, id: &str) -> Result<(), StoreWriteError> {
        self.content.remove::<Testimonial>(id).await?;
        self.testimonials.retain(|t| t.id != id);
        Ok(())
    }

    /// Change an inquiry's status, showing it locally before the write lands.
    /// On failure the previous status is restored.
    pub async fn set_inquiry_status(
        &mut self,
        id: &str,
        status: InquiryStatus,
    ) -> Result<(), StoreWriteError> {
        let previous = self
            .inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .map(|inquiry| std::mem::replace(&mut inquiry.status, status));

        let mut fields = Map::new();
        fields.insert("status".to_string(), Value::String(status.to_string()));

        if let Err(e) = self.content.update_field::<Inquiry>(id, fields).await {
            if let Some(previous) = previous {
                if let Some(inquiry) = self.inquiries.iter_mut().find(|i| i.id == id) {
                    inquiry.status = previous;
                }
            }
            tracing::warn!(inquiry_id = %id, "Rolled back inquiry status change");
            return Err(e);
        }

        Ok(())
    }
}
