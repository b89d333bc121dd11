//! Catalog service
//!
//! Operator-side management of packages, portfolio projects and
//! testimonials. New items are built from partial drafts, filling whatever
//! the operator left out with placeholders they can edit afterwards.

use std::sync::Arc;

use uuid::Uuid;

use super::content_service::ContentService;
use crate::domain::entities::{
    slugify, PackageDraft, PortfolioProject, ProjectDraft, ServicePackage, Testimonial,
    TestimonialDraft,
};
use crate::domain::ports::DocumentStore;
use crate::domain::CatalogRecord;
use crate::error::AppError;

pub const PLACEHOLDER_COVER: &str = "https://picsum.photos/800/600";

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build a package from a draft; `next_order` applies when the draft has none
pub fn package_from_draft(draft: PackageDraft, next_order: i32) -> ServicePackage {
    ServicePackage {
        id: new_id(),
        name: draft.name.unwrap_or_else(|| "New Package".to_string()),
        price_from: draft.price_from.unwrap_or_else(|| "IDR 0".to_string()),
        features: draft
            .features
            .unwrap_or_else(|| vec!["Feature 1".to_string()]),
        is_featured: draft.is_featured.unwrap_or(false),
        order: draft.order.unwrap_or(next_order),
    }
}

pub fn project_from_draft(draft: ProjectDraft) -> PortfolioProject {
    let title = draft.title.unwrap_or_else(|| "New Project".to_string());
    PortfolioProject {
        id: new_id(),
        slug: slugify(&title),
        title,
        cover_image: draft
            .cover_image
            .unwrap_or_else(|| PLACEHOLDER_COVER.to_string()),
        location: draft.location.unwrap_or_else(|| "Jakarta".to_string()),
        date: draft.date.unwrap_or_else(|| "2024".to_string()),
        theme_tags: draft
            .theme_tags
            .unwrap_or_else(|| vec!["Wedding".to_string()]),
        description: draft.description.unwrap_or_default(),
        vendors: draft.vendors.unwrap_or_default(),
        is_featured: draft.is_featured,
    }
}

pub fn testimonial_from_draft(draft: TestimonialDraft) -> Testimonial {
    Testimonial {
        id: new_id(),
        name: draft.name.unwrap_or_else(|| "Client Name".to_string()),
        role: draft.role.unwrap_or_else(|| "Couple".to_string()),
        rating: draft.rating.unwrap_or(5),
        quote: draft.quote.unwrap_or_default(),
        event_type: draft.event_type.unwrap_or_else(|| "Wedding".to_string()),
    }
}

/// Service for operator catalog edits
pub struct CatalogService<S>
where
    S: DocumentStore + ?Sized,
{
    content: Arc<ContentService<S>>,
}

impl<S> CatalogService<S>
where
    S: DocumentStore + ?Sized,
{
    pub fn new(content: Arc<ContentService<S>>) -> Self {
        Self { content }
    }

    /// Create a package, appended after the live packages unless the draft
    /// names an order
    pub async fn create_package(&self, draft: PackageDraft) -> Result<ServicePackage, AppError> {
        let live = self.content.fetch_collection::<ServicePackage>().await;
        let live_count = if live.source.is_live() {
            live.data.len()
        } else {
            0
        };
        let next_order = i32::try_from(live_count).unwrap_or(i32::MAX - 1) + 1;

        let package = package_from_draft(draft, next_order);
        self.save(package).await
    }

    pub async fn create_project(&self, draft: ProjectDraft) -> Result<PortfolioProject, AppError> {
        self.save(project_from_draft(draft)).await
    }

    pub async fn create_testimonial(
        &self,
        draft: TestimonialDraft,
    ) -> Result<Testimonial, AppError> {
        self.save(testimonial_from_draft(draft)).await
    }

    /// Validate and store a record under its id, replacing any previous version
    pub async fn save<T: CatalogRecord>(&self, record: T) -> Result<T, AppError> {
        record.validate()?;
        self.content.upsert(&record).await?;
        Ok(record)
    }

    /// Store a record under `id`, whatever id its body carries
    pub async fn save_as<T: CatalogRecord>(&self, id: &str, mut record: T) -> Result<T, AppError> {
        if id.trim().is_empty() {
            return Err(AppError::BadRequest("id must not be empty".to_string()));
        }
        record.set_id(id.to_string());
        self.save(record).await
    }

    /// Store a project, deriving its slug when the body has none
    pub async fn save_project(
        &self,
        id: &str,
        mut project: PortfolioProject,
    ) -> Result<PortfolioProject, AppError> {
        if project.slug.trim().is_empty() {
            project.slug = slugify(&project.title);
        }
        self.save_as(id, project).await
    }

    pub async fn delete<T: CatalogRecord>(&self, id: &str) -> Result<(), AppError> {
        self.content.remove::<T>(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::error::{DomainError, StoreError};
    use crate::test_utils::{test_package, test_project, Failure, MockDocumentStore};

    fn service(store: &Arc<MockDocumentStore>) -> CatalogService<MockDocumentStore> {
        CatalogService::new(Arc::new(ContentService::new(
            store.clone(),
            Duration::from_millis(200),
        )))
    }

    #[test]
    fn empty_drafts_get_placeholders() {
        let package = package_from_draft(PackageDraft::default(), 4);
        assert_eq!(package.name, "New Package");
        assert_eq!(package.price_from, "IDR 0");
        assert_eq!(package.features, vec!["Feature 1"]);
        assert_eq!(package.order, 4);

        let project = project_from_draft(ProjectDraft::default());
        assert_eq!(project.slug, "new-project");
        assert_eq!(project.location, "Jakarta");
        assert_eq!(project.theme_tags, vec!["Wedding"]);

        let testimonial = testimonial_from_draft(TestimonialDraft::default());
        assert_eq!(testimonial.name, "Client Name");
        assert_eq!(testimonial.rating, 5);
    }

    #[test]
    fn drafts_get_distinct_ids() {
        let a = project_from_draft(ProjectDraft::default());
        let b = project_from_draft(ProjectDraft::default());
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn new_package_goes_after_live_packages() {
        let store = Arc::new(MockDocumentStore::new());
        store
            .seed_records(&[test_package("a", 1), test_package("b", 2)])
            .await;

        let package = service(&store)
            .create_package(PackageDraft::default())
            .await
            .unwrap();
        assert_eq!(package.order, 3);
        assert_eq!(store.inner().count("packages").await, 3);
    }

    #[tokio::test]
    async fn first_package_in_empty_store_gets_order_one() {
        let store = Arc::new(MockDocumentStore::new());
        let package = service(&store)
            .create_package(PackageDraft::default())
            .await
            .unwrap();
        assert_eq!(package.order, 1);
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected_before_writing() {
        let store = Arc::new(MockDocumentStore::new());
        let draft = TestimonialDraft {
            rating: Some(6),
            ..Default::default()
        };

        let err = service(&store).create_testimonial(draft).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn save_project_uses_path_id_and_derives_missing_slug() {
        let store = Arc::new(MockDocumentStore::new());
        let mut project = test_project("ignored", "Test & Test");
        project.slug = String::new();

        let saved = service(&store).save_project("p9", project).await.unwrap();
        assert_eq!(saved.id, "p9");
        assert_eq!(saved.slug, "test-&-test");
        assert_eq!(store.writes(), vec!["set projects/p9"]);
    }

    #[tokio::test]
    async fn denied_delete_surfaces_error() {
        let store = Arc::new(MockDocumentStore::new().failing_writes(Failure::PermissionDenied));
        let err = service(&store)
            .delete::<ServicePackage>("1")
            .await
            .unwrap_err();
        match err {
            AppError::StoreWrite(e) => assert!(matches!(e.source, StoreError::PermissionDenied(_))),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
