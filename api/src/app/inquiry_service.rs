//! Inquiry service
//!
//! Lead capture and triage. A submission has two independent side effects:
//! it is appended to the store, and a chat link is composed for the visitor.
//! Neither one confirms the other.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::content_service::{ContentService, Fetched};
use crate::domain::entities::{Inquiry, InquiryStatus, NewInquiry, SiteSettings};
use crate::domain::ports::DocumentStore;
use crate::error::{AppError, StoreWriteError};
use crate::messaging::{render_inquiry_message, whatsapp_link};

/// Result of a submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    /// As stored when `persisted`, otherwise as submitted
    pub inquiry: Inquiry,
    pub persisted: bool,
    pub whatsapp_link: String,
    #[serde(skip)]
    pub error: Option<StoreWriteError>,
}

/// Status filter value that lists every inquiry
pub const ALL_STATUSES: &str = "all";

/// Operator-side inquiry list filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryFilter {
    /// `all` or empty means no status filter
    #[serde(default, deserialize_with = "status_filter")]
    pub status: Option<InquiryStatus>,
    /// Case-insensitive search over name and email
    pub q: Option<String>,
}

fn status_filter<'de, D>(deserializer: D) -> Result<Option<InquiryStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case(ALL_STATUSES) => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl InquiryFilter {
    pub fn matches(&self, inquiry: &Inquiry) -> bool {
        if let Some(status) = self.status {
            if inquiry.status != status {
                return false;
            }
        }
        match self.q.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => inquiry.matches_query(q),
            _ => true,
        }
    }
}

pub struct InquiryService<S>
where
    S: DocumentStore + ?Sized,
{
    content: Arc<ContentService<S>>,
}

impl<S> InquiryService<S>
where
    S: DocumentStore + ?Sized,
{
    pub fn new(content: Arc<ContentService<S>>) -> Self {
        Self { content }
    }

    /// Validate, persist and compose the chat link for a visitor submission
    ///
    /// Only validation failures are errors. A failed append is reported in
    /// the outcome, next to a link that is still usable.
    pub async fn submit(&self, submission: NewInquiry) -> Result<SubmissionOutcome, AppError> {
        submission.validate()?;
        let inquiry = submission.into_inquiry();

        let (settings, stored) = tokio::join!(
            self.content.fetch_singleton::<SiteSettings>(),
            self.content.append(inquiry.clone()),
        );

        let text = render_inquiry_message(&settings.data.brand_name, &inquiry);
        let link = whatsapp_link(&settings.data.whatsapp_number, &text);

        let outcome = match stored {
            Ok(stored) => {
                tracing::info!(inquiry_id = %stored.id, "Inquiry received");
                SubmissionOutcome {
                    inquiry: stored,
                    persisted: true,
                    whatsapp_link: link,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Inquiry was not stored, visitor still gets the chat link");
                SubmissionOutcome {
                    inquiry,
                    persisted: false,
                    whatsapp_link: link,
                    error: Some(e),
                }
            }
        };

        Ok(outcome)
    }

    /// Inquiries newest first, narrowed by `filter`
    pub async fn list(&self, filter: &InquiryFilter) -> Fetched<Vec<Inquiry>> {
        self.content
            .fetch_collection::<Inquiry>()
            .await
            .map(|inquiries| inquiries.into_iter().filter(|i| filter.matches(i)).collect())
    }

    pub async fn set_status(&self, id: &str, status: InquiryStatus) -> Result<(), AppError> {
        let mut fields = Map::new();
        fields.insert("status".to_string(), Value::String(status.to_string()));

        self.content.update_field::<Inquiry>(id, fields).await?;
        tracing::info!(inquiry_id = %id, status = %status, "Inquiry status changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio_test::assert_ok;

    use crate::error::{DomainError, StoreError};
    use crate::test_utils::{
        test_inquiry_at, test_new_inquiry, test_settings, Failure, MockDocumentStore,
    };

    fn service(store: &Arc<MockDocumentStore>) -> InquiryService<MockDocumentStore> {
        InquiryService::new(Arc::new(ContentService::new(
            store.clone(),
            Duration::from_millis(200),
        )))
    }

    #[tokio::test]
    async fn submission_is_stored_as_new() {
        let store = Arc::new(MockDocumentStore::new());
        let outcome = service(&store).submit(test_new_inquiry()).await.unwrap();

        assert!(outcome.persisted);
        assert_eq!(outcome.inquiry.status, InquiryStatus::New);
        assert!(!outcome.inquiry.id.is_empty());
        assert_eq!(store.inner().count("inquiries").await, 1);
    }

    #[tokio::test]
    async fn link_uses_live_settings() {
        let store = Arc::new(MockDocumentStore::new());
        store
            .inner()
            .seed(
                "settings",
                "global",
                serde_json::to_value(test_settings("+62 811 000")).unwrap(),
            )
            .await;

        let outcome = service(&store).submit(test_new_inquiry()).await.unwrap();
        assert!(outcome.whatsapp_link.starts_with("https://wa.me/62811000?text="));
        assert!(outcome.whatsapp_link.contains("Test%20Weddings"));
    }

    #[tokio::test]
    async fn failed_append_still_returns_link() {
        let store = Arc::new(MockDocumentStore::new().failing_writes(Failure::Unreachable));
        let outcome = service(&store).submit(test_new_inquiry()).await.unwrap();

        assert!(!outcome.persisted);
        assert!(outcome.whatsapp_link.starts_with("https://wa.me/6281234567890"));
        let error = outcome.error.unwrap();
        assert!(matches!(error.source, StoreError::Unreachable(_)));
    }

    #[tokio::test]
    async fn invalid_submission_is_not_stored() {
        let store = Arc::new(MockDocumentStore::new());
        let mut submission = test_new_inquiry();
        submission.phone = String::new();

        let err = service(&store).submit(submission).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn list_filters_by_status_and_query() {
        let store = Arc::new(MockDocumentStore::new());
        let mut closed = test_inquiry_at("a", "2024-01-01T00:00:00Z");
        closed.status = InquiryStatus::Closed;
        let mut budi = test_inquiry_at("b", "2024-02-01T00:00:00Z");
        budi.name = "Budi Santoso".to_string();
        budi.email = "budi@example.com".to_string();
        let rina = test_inquiry_at("c", "2024-03-01T00:00:00Z");
        store.seed_records(&[closed, budi, rina]).await;
        let inquiries = service(&store);

        let all = inquiries.list(&InquiryFilter::default()).await;
        let ids: Vec<_> = all.data.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);

        let new_only = inquiries
            .list(&InquiryFilter {
                status: Some(InquiryStatus::New),
                q: None,
            })
            .await;
        assert_eq!(new_only.data.len(), 2);

        let search = inquiries
            .list(&InquiryFilter {
                status: None,
                q: Some("BUDI".to_string()),
            })
            .await;
        assert_eq!(search.data.len(), 1);
        assert_eq!(search.data[0].id, "b");
    }

    #[test]
    fn all_or_empty_status_means_no_filter() {
        let parse = |json| serde_json::from_value::<InquiryFilter>(json).unwrap();

        assert_eq!(parse(serde_json::json!({ "status": "all" })).status, None);
        assert_eq!(parse(serde_json::json!({ "status": "" })).status, None);
        assert_eq!(parse(serde_json::json!({})).status, None);
        assert_eq!(
            parse(serde_json::json!({ "status": "Closed" })).status,
            Some(InquiryStatus::Closed)
        );
        assert!(
            serde_json::from_value::<InquiryFilter>(serde_json::json!({ "status": "lost" }))
                .is_err()
        );
    }

    #[tokio::test]
    async fn set_status_updates_only_status() {
        let store = Arc::new(MockDocumentStore::new());
        store
            .seed_records(&[test_inquiry_at("x1", "2024-01-01T00:00:00Z")])
            .await;
        let inquiries = service(&store);

        assert_ok!(inquiries.set_status("x1", InquiryStatus::Contacted).await);

        let listed = inquiries.list(&InquiryFilter::default()).await;
        assert_eq!(listed.data[0].status, InquiryStatus::Contacted);
        assert_eq!(listed.data[0].name, "Rina Wijaya");
    }

    #[tokio::test]
    async fn set_status_on_missing_inquiry_fails() {
        let store = Arc::new(MockDocumentStore::new());
        let err = service(&store)
            .set_status("x1", InquiryStatus::Closed)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StoreWrite(_)));
    }
}
